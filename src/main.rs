use cookbook_imagery::{
    analyze_recipe_colors, AppearanceAnalyzer, CookbookImageGenerator, CookbookRecipe,
    DishImageRequest, ImageryConfig, RecipeImages,
};
use log::info;
use std::env;

const USAGE: &str = "Usage:
  cookbook-imagery analyze <recipe.json>
  cookbook-imagery recipe <recipe.json> [--dish-only | --ingredients-only] [--output-dir <dir>]
  cookbook-imagery dish <name> <description> [ingredient ...] [--dish-only] [--output-dir <dir>]";

/// Positional arguments with the generation flags pulled out
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    positional: Vec<String>,
    dish_only: bool,
    ingredients_only: bool,
    output_dir: Option<String>,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, &'static str> {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--dish-only" => parsed.dish_only = true,
                "--ingredients-only" => parsed.ingredients_only = true,
                "--output-dir" => parsed.output_dir = Some(args.next().ok_or(USAGE)?),
                _ => parsed.positional.push(arg),
            }
        }

        Ok(parsed)
    }

    fn generator(&self) -> Result<CookbookImageGenerator, Box<dyn std::error::Error>> {
        let mut config = ImageryConfig::load()?;
        if let Some(dir) = &self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        Ok(CookbookImageGenerator::new(&config)?)
    }
}

fn print_images(images: &RecipeImages) {
    println!("Generated {} images:", images.len());
    if let Some(dish) = &images.dish {
        println!("   dish: {}", dish.display());
    }
    if let Some(ingredients) = &images.ingredients {
        println!("   ingredients: {}", ingredients.display());
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse(env::args().skip(1))?;
    let command = args.positional.first().ok_or(USAGE)?;

    match command.as_str() {
        "analyze" => {
            let path = args.positional.get(1).ok_or(USAGE)?;
            print!("{}", analyze_recipe_colors(path).await?);
        }
        "recipe" => {
            let path = args.positional.get(1).ok_or(USAGE)?;
            let recipe = CookbookRecipe::from_file(path).await?;

            let images = args
                .generator()?
                .generate_recipe_images(&recipe, !args.ingredients_only, !args.dish_only)
                .await?;
            print_images(&images);
        }
        "dish" => {
            let name = args.positional.get(1).ok_or(USAGE)?;
            let description = args.positional.get(2).ok_or(USAGE)?;
            let ingredients = args.positional.get(3..).unwrap_or_default();

            let request = DishImageRequest::builder()
                .dish_name(name.as_str())
                .description(description.as_str())
                .ingredients(ingredients.iter().cloned())
                .build()?;
            let analysis = AppearanceAnalyzer::analyze(&request.ingredients);
            info!("Detected colors: {}", analysis.color_description);

            let images = args
                .generator()?
                .generate_dish_images(&request, !args.dish_only)
                .await?;
            print_images(&images);
        }
        _ => return Err(USAGE.into()),
    }

    Ok(())
}
