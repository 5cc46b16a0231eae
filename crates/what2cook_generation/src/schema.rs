//! Response schemas in the model's schema dialect.

use serde_json::{Value, json};

/// Schema for an array of recipes, without the image field.
pub fn recipe_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "recipeName": {
                    "type": "STRING",
                    "description": "The name of the recipe."
                },
                "description": {
                    "type": "STRING",
                    "description": "A short, enticing description of the dish."
                },
                "prepTime": {
                    "type": "STRING",
                    "description": "Estimated preparation time (e.g., '15 minutes')."
                },
                "cookTime": {
                    "type": "STRING",
                    "description": "Estimated cooking time (e.g., '30 minutes')."
                },
                "servings": {
                    "type": "STRING",
                    "description": "Number of servings the recipe makes (e.g., '4 servings')."
                },
                "ingredients": {
                    "type": "ARRAY",
                    "description": "Every ingredient the recipe needs, including the ones the user has.",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": {
                                "type": "STRING",
                                "description": "The name of the ingredient."
                            },
                            "quantity": {
                                "type": "STRING",
                                "description": "The amount of the ingredient (e.g., '2 cups', '1 tbsp')."
                            }
                        },
                        "required": ["name", "quantity"]
                    }
                },
                "instructions": {
                    "type": "ARRAY",
                    "description": "Step-by-step instructions for preparing the recipe.",
                    "items": { "type": "STRING" }
                }
            },
            "required": [
                "recipeName",
                "description",
                "ingredients",
                "instructions",
                "prepTime",
                "cookTime",
                "servings"
            ]
        }
    })
}

/// Schema for a categorized shopping list.
pub fn shopping_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "category": {
                    "type": "STRING",
                    "description": "Grocery store section, e.g. 'Produce' or 'Dairy & Eggs'."
                },
                "items": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "name": {
                                "type": "STRING",
                                "description": "The name of the ingredient."
                            },
                            "quantity": {
                                "type": "STRING",
                                "description": "Total amount needed across all recipes."
                            },
                            "purchaseSize": {
                                "type": "STRING",
                                "description": "Typical store unit to buy, e.g. '1 bunch'."
                            }
                        },
                        "required": ["name", "quantity", "purchaseSize"]
                    }
                }
            },
            "required": ["category", "items"]
        }
    })
}
