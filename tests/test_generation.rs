//! End-to-end generation tests for both strategies

use async_trait::async_trait;
use entitygen::model::ModelResult;
use entitygen::strategy::{EXTERNAL_FAILURE_PREFIX, MISSING_CREDENTIAL_DIAGNOSTIC};
use entitygen::{
    analyze_fields, extract_class_name, synthesize, EntityField, EntityGenerator,
    GenerationRequest, GenerativeModel, ModelError, SemanticType,
};
use std::sync::Arc;
use std::time::Duration;

struct CannedModel(&'static str);

#[async_trait]
impl GenerativeModel for CannedModel {
    fn name(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _system_instruction: &str, _prompt: &str) -> ModelResult<String> {
        Ok(self.0.to_string())
    }
}

struct UnreachableModel;

#[async_trait]
impl GenerativeModel for UnreachableModel {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn generate(&self, _system_instruction: &str, _prompt: &str) -> ModelResult<String> {
        Err(ModelError::InvalidResponse("connection refused".to_string()))
    }
}

fn accessor_count(source: &str) -> usize {
    source
        .lines()
        .filter(|l| l.starts_with("    public "))
        .count()
}

#[tokio::test]
async fn test_scenario_user_entity_without_accessors() {
    let prompt = "Vytvoř entitu Uzivatel se jménem a emailem";

    assert_eq!(extract_class_name(prompt), "Uzivatel");
    let fields = analyze_fields(prompt);
    assert_eq!(
        fields.iter().cloned().collect::<Vec<_>>(),
        vec![
            EntityField::new(SemanticType::Text, "nazev"),
            EntityField::new(SemanticType::Text, "email"),
        ]
    );

    let source = EntityGenerator::heuristic_only()
        .generate(&GenerationRequest::heuristic(prompt))
        .await;

    assert!(source.contains("public class Uzivatel {"));
    assert!(source.contains("    private Long id;"));
    assert!(source.contains("    private String nazev;"));
    assert!(source.contains("    private String email;"));
    assert!(source.contains("@Data"));
    assert_eq!(accessor_count(&source), 0);
}

#[tokio::test]
async fn test_scenario_fallbacks_with_accessors() {
    let request = GenerationRequest::heuristic("popis produktu").with_accessors(true);
    let source = EntityGenerator::heuristic_only().generate(&request).await;

    assert!(source.contains("public class GeneratedEntity {"));
    assert!(source.contains("    private String popis;"));
    assert!(source.contains("    public Long getId() {"));
    assert!(source.contains("    public void setId(Long id) {"));
    assert!(source.contains("    public String getPopis() {"));
    assert!(source.contains("    public void setPopis(String popis) {"));
    assert_eq!(accessor_count(&source), 4);
}

#[tokio::test]
async fn test_scenario_ai_without_credential() {
    let generator = EntityGenerator::heuristic_only();

    for prompt in ["entita Kniha", "", "cokoliv jiného"] {
        let request = GenerationRequest::heuristic(prompt).with_ai(true);
        assert_eq!(generator.generate(&request).await, MISSING_CREDENTIAL_DIAGNOSTIC);
    }
}

#[tokio::test]
async fn test_scenario_ai_response_fences_stripped() {
    let model = CannedModel("```java\n@Entity\npublic class Kniha {\n}\n```\n");
    let generator = EntityGenerator::with_model(Some(Arc::new(model)), Duration::from_secs(5));

    let request = GenerationRequest::heuristic("entita Kniha").with_ai(true);
    assert_eq!(
        generator.generate(&request).await,
        "@Entity\npublic class Kniha {\n}"
    );
}

#[tokio::test]
async fn test_ai_failure_is_reported_in_band() {
    let generator =
        EntityGenerator::with_model(Some(Arc::new(UnreachableModel)), Duration::from_secs(5));

    let out = generator
        .generate(&GenerationRequest::heuristic("entita Kniha").with_ai(true))
        .await;

    assert!(out.starts_with(EXTERNAL_FAILURE_PREFIX));
    assert!(out.contains("connection refused"));
}

#[tokio::test]
async fn test_heuristic_ignores_configured_model() {
    let generator = EntityGenerator::with_model(
        Some(Arc::new(CannedModel("should not be used"))),
        Duration::from_secs(5),
    );

    let out = generator
        .generate(&GenerationRequest::heuristic("třída Auto"))
        .await;
    assert!(out.contains("public class Auto {"));
}

#[test]
fn test_accessor_count_matches_field_count() {
    for prompt in [
        "entita A",
        "entita B se jménem",
        "entita C se jménem, příjmením, emailem, věkem, platem, datem a aktivní",
    ] {
        let fields = analyze_fields(prompt);
        let source = synthesize(&extract_class_name(prompt), &fields, true);
        assert_eq!(accessor_count(&source), 2 * (fields.len() + 1), "prompt: {}", prompt);
    }
}

#[test]
fn test_field_order_independent_of_prompt_order() {
    let forward = analyze_fields("jméno, email, datum");
    let backward = analyze_fields("datum, email, jméno");
    assert_eq!(forward, backward);
    assert_eq!(forward.names(), vec!["nazev", "email", "datum"]);
}

#[test]
fn test_identity_field_precedes_inferred_fields() {
    let source = synthesize("Kniha", &analyze_fields("název a cena"), true);

    let id = source.find("private Long id;").unwrap();
    let nazev = source.find("private String nazev;").unwrap();
    let cena = source.find("private java.math.BigDecimal cena;").unwrap();
    assert!(id < nazev && nazev < cena);

    let get_id = source.find("getId()").unwrap();
    let get_nazev = source.find("getNazev()").unwrap();
    let get_cena = source.find("getCena()").unwrap();
    assert!(get_id < get_nazev && get_nazev < get_cena);
}

#[test]
fn test_synthesize_is_idempotent() {
    let fields = analyze_fields("jméno, věk, datum a aktivní");
    let first = synthesize("Osoba", &fields, false);
    let second = synthesize("Osoba", &fields, false);
    assert_eq!(first.as_bytes(), second.as_bytes());
}
