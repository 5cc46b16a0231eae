//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use what2cook::{Cuisine, Diet, IndianRegion, MealType, ShareTarget};

/// Recipe ideas from the ingredients you already have.
#[derive(Parser, Debug)]
#[command(name = "what2cook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to ./what2cook.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate recipes from ingredients and preferences
    Generate(GenerateArgs),

    /// Manage saved recipes
    #[command(subcommand)]
    Saved(SavedCommand),

    /// Build a consolidated shopping list from saved recipes
    ShoppingList {
        /// Saved recipes to include (all when omitted)
        names: Vec<String>,
    },

    /// Print a saved recipe or a shopping list for sharing
    Share {
        /// Saved recipe to share
        #[arg(required_unless_present = "shopping_list", conflicts_with = "shopping_list")]
        name: Option<String>,

        /// Share a shopping list built from all saved recipes instead
        #[arg(long)]
        shopping_list: bool,

        /// Output form: text, whatsapp or email
        #[arg(short, long, default_value = "text")]
        target: ShareTarget,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Ingredient you have (repeatable; defaults to the last list used)
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Breakfast, Lunch, Dinner, Dessert or Snack
    #[arg(long, default_value = "Dinner")]
    pub meal: MealType,

    /// Any, Italian, Mexican, Indian, Chinese, Japanese, Thai or American
    #[arg(long, default_value = "Indian")]
    pub cuisine: Cuisine,

    /// Any, North or South (Indian cuisine only)
    #[arg(long)]
    pub region: Option<IndianRegion>,

    /// None, Vegetarian, Vegan, Gluten-Free or Keto
    #[arg(long, default_value = "Vegetarian")]
    pub diet: Diet,

    /// Free-text request passed to the model as is
    #[arg(long)]
    pub request: Option<String>,

    /// Save every generated recipe
    #[arg(long)]
    pub save: bool,

    /// Skip photo generation
    #[arg(long)]
    pub no_images: bool,
}

#[derive(Subcommand, Debug)]
pub enum SavedCommand {
    /// List saved recipes
    List,

    /// Show a saved recipe
    Show {
        /// Recipe name
        name: String,
    },

    /// Remove a saved recipe
    Remove {
        /// Recipe name
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::parse_from(["what2cook", "generate", "-i", "paneer", "-i", "spinach"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.ingredients, ["paneer", "spinach"]);
        assert_eq!(args.meal, MealType::Dinner);
        assert_eq!(args.cuisine, Cuisine::Indian);
        assert_eq!(args.diet, Diet::Vegetarian);
        assert_eq!(args.region, None);
        assert!(!args.save);
    }

    #[test]
    fn test_options_parse_case_insensitively() {
        let cli = Cli::parse_from([
            "what2cook", "generate", "--cuisine", "indian", "--region", "north", "--diet",
            "gluten-free",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.region, Some(IndianRegion::North));
        assert_eq!(args.diet, Diet::GlutenFree);
    }

    #[test]
    fn test_share_needs_a_name_or_shopping_list() {
        assert!(Cli::try_parse_from(["what2cook", "share"]).is_err());

        let cli = Cli::parse_from(["what2cook", "share", "--shopping-list", "-t", "email"]);
        let Commands::Share {
            name,
            shopping_list,
            target,
        } = cli.command
        else {
            panic!("expected share");
        };
        assert!(name.is_none());
        assert!(shopping_list);
        assert_eq!(target, ShareTarget::Email);
    }
}
