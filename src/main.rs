use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

use leftover_chef::{
    collect_ingredients, render_recipe_list, show_current_recipe, update_food_saved, ChefClient,
    ChefConfig, ChefError, LocalStorage, MealType, Page, RecipeForm, Submission, TerminalPage,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Origin of the recipe API
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// File used as client-local storage
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Get a recipe for comma-separated ingredients and show it
    Generate {
        ingredients: String,
        #[arg(long)]
        meal_type: Option<MealType>,
    },
    /// Show how many pounds of food have been saved
    FoodSaved,
    /// List other recipes that use these ingredients
    Alternatives {
        ingredients: String,
        #[arg(long)]
        meal_type: Option<MealType>,
        /// How many to list; the server picks 5 when unset
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List recipes for a meal type (breakfast, lunch, dinner, any)
    ByMealType { meal_type: MealType },
    /// Show the last stored recipe
    Show,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ExitCode, ChefError> {
    let mut config = ChefConfig::load()?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(storage) = args.storage {
        config.storage_path = storage;
    }
    debug!("{:#?}", config);

    let client = ChefClient::new(&config.base_url, config.timeout())?;

    match args.command {
        Command::Generate {
            ingredients,
            meal_type,
        } => {
            let mut page = TerminalPage::new();
            update_food_saved(&client, &mut page).await;
            println!("Food saved: {} lbs", page.food_saved());

            let mut storage = LocalStorage::open(&config.storage_path).await?;
            let mut form = RecipeForm::new(&client, &mut storage, &config.results_page);
            match form.generate_meal(&mut page, &ingredients, meal_type).await {
                Submission::Navigated(_) => println!("\n{}", show_current_recipe(&storage)?),
                Submission::Blocked | Submission::NoRecipe => return Ok(ExitCode::FAILURE),
            }
        }
        Command::FoodSaved => {
            let mut page = TerminalPage::new();
            update_food_saved(&client, &mut page).await;
            println!("{}", page.food_saved());
        }
        Command::Alternatives {
            ingredients,
            meal_type,
            limit,
        } => {
            let ingredients = collect_ingredients(&ingredients)?;
            let recipes = client
                .request_alternatives(&ingredients, meal_type, limit)
                .await?;
            print!("{}", render_recipe_list(&recipes));
        }
        Command::ByMealType { meal_type } => {
            let recipes = client.recipes_by_meal_type(meal_type).await?;
            print!("{}", render_recipe_list(&recipes));
        }
        Command::Show => {
            let storage = LocalStorage::open(&config.storage_path).await?;
            println!("{}", show_current_recipe(&storage)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
