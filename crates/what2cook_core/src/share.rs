//! Plain-text renderings of recipes and shopping lists for sharing.
//!
//! The same text goes to the clipboard, a messaging deep link, or a mail
//! compose link.

use crate::{Recipe, ShoppingList};
use serde::{Deserialize, Serialize};

const MESSAGING_BASE_URL: &str = "https://api.whatsapp.com/send";
const RULER: &str = "--------------------";

/// Where shared text is headed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ShareTarget {
    /// Plain text, e.g. for the clipboard
    #[default]
    Text,
    /// Messaging deep link
    Whatsapp,
    /// `mailto:` compose link
    Email,
}

/// A subject line and body ready for a mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

/// Trims the text and collapses runs of blank lines into one.
fn collapse_blank_lines(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in text.trim().lines() {
        let blank = line.trim().is_empty();
        if blank && out.last().is_some_and(|prev| prev.is_empty()) {
            continue;
        }
        out.push(if blank { "" } else { line });
    }
    out.join("\n")
}

fn ingredient_lines(recipe: &Recipe, bullet: &str) -> String {
    recipe
        .ingredients
        .iter()
        .map(|ing| format!("{} {} {}", bullet, ing.quantity, ing.name))
        .collect::<Vec<_>>()
        .join("\n")
}

fn instruction_lines(recipe: &Recipe) -> String {
    recipe
        .instructions
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a recipe for messaging apps and the clipboard.
///
/// # Examples
///
/// ```
/// use what2cook_core::{share, Ingredient, Recipe};
///
/// let recipe = Recipe {
///     recipe_name: "Toast".to_string(),
///     description: "Crisp bread.".to_string(),
///     prep_time: "1 minute".to_string(),
///     cook_time: "2 minutes".to_string(),
///     servings: "1 serving".to_string(),
///     ingredients: vec![Ingredient::new("bread", "2 slices")],
///     instructions: vec!["Toast the bread.".to_string()],
///     image_url: None,
/// };
///
/// let text = share::recipe_text(&recipe);
/// assert!(text.starts_with("*Toast*"));
/// assert!(text.contains("- 2 slices bread"));
/// assert!(text.contains("1. Toast the bread."));
/// ```
pub fn recipe_text(recipe: &Recipe) -> String {
    let text = format!(
        "*{name}*\n\n{description}\n\n*Ingredients:*\n{ingredients}\n\n*Instructions:*\n{instructions}\n\nShared from What2Cook!",
        name = recipe.recipe_name,
        description = recipe.description,
        ingredients = ingredient_lines(recipe, "-"),
        instructions = instruction_lines(recipe),
    );
    collapse_blank_lines(&text)
}

/// Renders a recipe as an email.
pub fn recipe_email(recipe: &Recipe) -> EmailMessage {
    let body = format!(
        "Hello!\n\nHere is a recipe for {name}:\n\n{description}\n\n{RULER}\nINGREDIENTS\n{RULER}\n{ingredients}\n\n{RULER}\nINSTRUCTIONS\n{RULER}\n{instructions}\n\nEnjoy!\nShared from What2Cook.",
        name = recipe.recipe_name,
        description = recipe.description,
        ingredients = ingredient_lines(recipe, "•"),
        instructions = instruction_lines(recipe),
    );
    EmailMessage {
        subject: format!("Check out this recipe: {}", recipe.recipe_name),
        body: collapse_blank_lines(&body),
    }
}

/// Renders a shopping list, one block per category.
pub fn shopping_list_text(list: &ShoppingList) -> String {
    list.categories()
        .iter()
        .map(|category| {
            let items = category
                .items
                .iter()
                .map(|item| {
                    format!(
                        "- {}: {} (buy: {})",
                        item.name, item.quantity, item.purchase_size
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("*{}*\n{}", category.category, items)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders a shopping list as an email.
pub fn shopping_list_email(list: &ShoppingList) -> EmailMessage {
    EmailMessage {
        subject: "My What2Cook shopping list".to_string(),
        body: shopping_list_text(list),
    }
}

/// Builds a messaging deep link carrying `text`.
pub fn whatsapp_link(text: &str) -> String {
    format!("{}?text={}", MESSAGING_BASE_URL, urlencoding::encode(text))
}

/// Builds a `mailto:` link with subject and body.
pub fn mailto_link(message: &EmailMessage) -> String {
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&message.subject),
        urlencoding::encode(&message.body)
    )
}

/// Renders a recipe for the given target.
pub fn share_recipe(recipe: &Recipe, target: ShareTarget) -> String {
    match target {
        ShareTarget::Text => recipe_text(recipe),
        ShareTarget::Whatsapp => whatsapp_link(&recipe_text(recipe)),
        ShareTarget::Email => mailto_link(&recipe_email(recipe)),
    }
}

/// Renders a shopping list for the given target.
pub fn share_shopping_list(list: &ShoppingList, target: ShareTarget) -> String {
    match target {
        ShareTarget::Text => shopping_list_text(list),
        ShareTarget::Whatsapp => whatsapp_link(&shopping_list_text(list)),
        ShareTarget::Email => mailto_link(&shopping_list_email(list)),
    }
}
