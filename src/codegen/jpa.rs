//! JPA entity source synthesis.
//!
//! Produces a Jakarta Persistence class with a generated `Long id`, one
//! private field per inferred field and, optionally, explicit accessors.
//! Without accessors the class is annotated with Lombok's `@Data` instead.

use crate::codegen::accessors::emit_accessors;
use crate::codegen::utils::indent;
use crate::entity::FieldSet;

const ID_TYPE: &str = "Long";
const ID_NAME: &str = "id";

/// Assemble the entity class source.
///
/// Output is a pure function of the arguments: the identity field and its
/// accessors always come first, followed by `fields` in set order.
pub fn synthesize(class_name: &str, fields: &FieldSet, generate_accessors: bool) -> String {
    let mut code = String::new();

    code.push_str("import jakarta.persistence.*;\n");
    if !generate_accessors {
        code.push_str("import lombok.Data;\n");
    }
    code.push_str("import java.time.LocalDate;\n\n");

    code.push_str("@Entity\n");
    if !generate_accessors {
        code.push_str("@Data\n");
    }
    code.push_str(&format!("public class {} {{\n\n", class_name));

    code.push_str("    @Id\n");
    code.push_str("    @GeneratedValue(strategy = GenerationType.IDENTITY)\n");
    code.push_str(&format!("    private {} {};\n\n", ID_TYPE, ID_NAME));

    for field in fields {
        code.push_str(&format!(
            "    private {} {};\n",
            field.field_type.java_type(),
            field.name
        ));
    }

    if generate_accessors {
        code.push_str("\n    // --- Gettery a Settery ---\n\n");
        push_accessors(&mut code, ID_TYPE, ID_NAME);
        for field in fields {
            push_accessors(&mut code, field.field_type.java_type(), &field.name);
        }
    }

    code.push_str("}\n");
    code
}

fn push_accessors(code: &mut String, java_type: &str, name: &str) {
    let pair = emit_accessors(java_type, name);
    code.push_str(&indent(&pair.getter, 1));
    code.push_str("\n\n");
    code.push_str(&indent(&pair.setter, 1));
    code.push_str("\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityField, SemanticType};

    fn sample_fields() -> FieldSet {
        vec![
            EntityField::new(SemanticType::Text, "nazev"),
            EntityField::new(SemanticType::Date, "datum"),
        ]
        .into_iter()
        .collect()
    }

    fn accessor_lines(code: &str) -> Vec<&str> {
        code.lines()
            .filter(|l| l.starts_with("    public "))
            .collect()
    }

    #[test]
    fn test_synthesize_without_accessors() {
        let code = synthesize("Kniha", &sample_fields(), false);

        let expected = "\
import jakarta.persistence.*;
import lombok.Data;
import java.time.LocalDate;

@Entity
@Data
public class Kniha {

    @Id
    @GeneratedValue(strategy = GenerationType.IDENTITY)
    private Long id;

    private String nazev;
    private LocalDate datum;
}
";
        assert_eq!(code, expected);
        assert!(accessor_lines(&code).is_empty());
    }

    #[test]
    fn test_synthesize_with_accessors() {
        let fields: FieldSet = vec![EntityField::new(SemanticType::Text, "popis")]
            .into_iter()
            .collect();
        let code = synthesize("GeneratedEntity", &fields, true);

        let expected = "\
import jakarta.persistence.*;
import java.time.LocalDate;

@Entity
public class GeneratedEntity {

    @Id
    @GeneratedValue(strategy = GenerationType.IDENTITY)
    private Long id;

    private String popis;

    // --- Gettery a Settery ---

    public Long getId() {
        return this.id;
    }

    public void setId(Long id) {
        this.id = id;
    }

    public String getPopis() {
        return this.popis;
    }

    public void setPopis(String popis) {
        this.popis = popis;
    }

}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_accessor_count_and_order() {
        let fields = sample_fields();
        let code = synthesize("Kniha", &fields, true);

        let lines = accessor_lines(&code);
        assert_eq!(lines.len(), 2 * (fields.len() + 1));
        assert_eq!(
            lines,
            vec![
                "    public Long getId() {",
                "    public void setId(Long id) {",
                "    public String getNazev() {",
                "    public void setNazev(String nazev) {",
                "    public LocalDate getDatum() {",
                "    public void setDatum(LocalDate datum) {",
            ]
        );
    }

    #[test]
    fn test_lombok_omitted_with_accessors() {
        let code = synthesize("Kniha", &sample_fields(), true);
        assert!(!code.contains("lombok"));
        assert!(!code.contains("@Data"));
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let fields = sample_fields();
        assert_eq!(
            synthesize("Kniha", &fields, true),
            synthesize("Kniha", &fields, true)
        );
    }
}
