use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use what2cook_core::{Ingredient, Recipe, StructuredRequest};
use what2cook_error::{ErrorCategory, GenerationError, GenerationErrorKind};
use what2cook_generation::{GenerationOptions, ShoppingListBuilder};
use what2cook_interface::TextModel;

struct CannedModel {
    answer: Result<String, GenerationErrorKind>,
    prompts: Mutex<Vec<String>>,
}

impl CannedModel {
    fn new(answer: Result<&str, GenerationErrorKind>) -> Arc<Self> {
        Arc::new(Self {
            answer: answer.map(str::to_string),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl TextModel for CannedModel {
    async fn generate_json(&self, request: &StructuredRequest) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(request.prompt.clone());
        self.answer.clone().map_err(GenerationError::new)
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }
}

fn recipe(name: &str, ingredients: &[(&str, &str)]) -> Recipe {
    Recipe {
        recipe_name: name.to_string(),
        description: "Tasty.".to_string(),
        prep_time: "5 minutes".to_string(),
        cook_time: "10 minutes".to_string(),
        servings: "2 servings".to_string(),
        ingredients: ingredients
            .iter()
            .map(|(name, quantity)| Ingredient::new(*name, *quantity))
            .collect(),
        instructions: vec!["Cook.".to_string()],
        image_url: None,
    }
}

fn onion_recipes() -> Vec<Recipe> {
    vec![
        recipe("Onion Bhaji", &[("onion", "1"), ("gram flour", "1 cup")]),
        recipe("Kachumber", &[("onion", "1/2"), ("salt", "to taste")]),
    ]
}

#[tokio::test]
async fn test_prompt_lists_every_source_quantity() {
    let model = CannedModel::new(Ok("[]"));
    let builder = ShoppingListBuilder::new(model.clone(), GenerationOptions::default());

    builder.generate_shopping_list(&onion_recipes()).await.unwrap();

    let prompts = model.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("- 1 onion"));
    assert!(prompts[0].contains("- 1/2 onion"));
    assert!(prompts[0].contains("- 1 cup gram flour"));
}

#[tokio::test]
async fn test_categories_are_returned_in_order() {
    let answer = r#"[
        {"category": "Produce", "items": [
            {"name": "onion", "quantity": "1 1/2 onions", "purchaseSize": "1 small bag"}]},
        {"category": "Pantry Staples", "items": [
            {"name": "gram flour", "quantity": "1 cup", "purchaseSize": "1 kg bag"}]}
    ]"#;
    let model = CannedModel::new(Ok(answer));
    let builder = ShoppingListBuilder::new(model, GenerationOptions::default());

    let list = builder
        .generate_shopping_list(&onion_recipes())
        .await
        .unwrap()
        .expect("a shopping list");

    let categories: Vec<_> = list.categories().iter().map(|c| c.category.as_str()).collect();
    assert_eq!(categories, ["Produce", "Pantry Staples"]);
    assert_eq!(list.categories()[0].items[0].purchase_size, "1 small bag");
}

#[tokio::test]
async fn test_empty_or_unparseable_answer_is_none() {
    for answer in ["[]", "no idea", r#"{"category": "Produce"}"#] {
        let model = CannedModel::new(Ok(answer));
        let builder = ShoppingListBuilder::new(model, GenerationOptions::default());
        let list = builder.generate_shopping_list(&onion_recipes()).await.unwrap();
        assert!(list.is_none(), "expected none for {answer}");
    }
}

#[tokio::test]
async fn test_transport_failure_propagates() {
    let model = CannedModel::new(Err(GenerationErrorKind::Request(
        "connection reset".to_string(),
    )));
    let builder = ShoppingListBuilder::new(model, GenerationOptions::default());

    let err = builder
        .generate_shopping_list(&onion_recipes())
        .await
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Generation);
    assert!(err.user_message().contains("connection reset"));
}

#[tokio::test]
async fn test_empty_or_blocked_response_is_none() {
    for kind in [
        GenerationErrorKind::EmptyResponse,
        GenerationErrorKind::Blocked("SAFETY".to_string()),
    ] {
        let model = CannedModel::new(Err(kind.clone()));
        let builder = ShoppingListBuilder::new(model, GenerationOptions::default());
        let list = builder.generate_shopping_list(&onion_recipes()).await.unwrap();
        assert!(list.is_none(), "expected none for {kind}");
    }
}

#[tokio::test]
async fn test_http_error_still_propagates() {
    let model = CannedModel::new(Err(GenerationErrorKind::HttpError {
        status_code: 503,
        message: "The model is overloaded.".to_string(),
    }));
    let builder = ShoppingListBuilder::new(model, GenerationOptions::default());

    let err = builder
        .generate_shopping_list(&onion_recipes())
        .await
        .unwrap_err();
    assert!(err.user_message().contains("overloaded"));
}
