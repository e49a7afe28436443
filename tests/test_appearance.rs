use cookbook_imagery::appearance::{NO_COLORS_DESCRIPTION, NO_INGREDIENTS_DESCRIPTION};
use cookbook_imagery::AppearanceAnalyzer;

fn intensity_of(analysis: &cookbook_imagery::AnalysisResult, color: &str) -> Option<f64> {
    analysis
        .all_colors
        .iter()
        .find(|c| c.color == color)
        .map(|c| c.intensity)
}

#[test]
fn test_empty_ingredients_fallback() {
    let analysis = AppearanceAnalyzer::analyze::<&str>(&[]);

    assert_eq!(analysis.color_description, NO_INGREDIENTS_DESCRIPTION);
    assert!(analysis.dominant_colors.is_empty());
    assert!(analysis.all_colors.is_empty());
    assert!(analysis.liquid_base.is_none());
}

#[test]
fn test_unknown_ingredients_fallback() {
    let analysis = AppearanceAnalyzer::analyze(&["salt", "", "   ", "ras el hanout"]);

    assert_eq!(analysis.color_description, NO_COLORS_DESCRIPTION);
    assert!(analysis.dominant_colors.is_empty());
}

#[test]
fn test_description_never_empty() {
    let inputs: Vec<Vec<&str>> = vec![
        vec![],
        vec![""],
        vec!["🌶️🌶️🌶️"],
        vec!["WATER"],
        vec!["2 tbsp sweet paprika", "1 tomato", "1 cup couscous"],
    ];

    for ingredients in inputs {
        let analysis = AppearanceAnalyzer::analyze(&ingredients);
        assert!(!analysis.color_description.is_empty(), "{:?}", ingredients);
    }
}

#[test]
fn test_sweet_paprika_beats_tomato() {
    let analysis =
        AppearanceAnalyzer::analyze(&["2 tbsp sweet paprika", "1 tomato", "1 cup couscous"]);

    let paprika = intensity_of(&analysis, "warm orange-red").unwrap();
    let tomato = intensity_of(&analysis, "tomato red").unwrap();
    assert!(paprika >= tomato);

    assert_eq!(analysis.dominant_colors[0], "warm orange-red");
    assert!(analysis.color_description.contains("orange-red"));
    // "paprika" is covered by "sweet paprika" and must not be counted twice
    assert_eq!(
        analysis
            .all_colors
            .iter()
            .filter(|c| c.color == "warm orange-red")
            .count(),
        1
    );
}

#[test]
fn test_specific_keyword_suppresses_generic_one() {
    // "tomato paste" wins over "tomato" inside the same line
    let analysis = AppearanceAnalyzer::analyze(&["tomato paste"]);
    assert_eq!(analysis.dominant_colors, vec!["deep concentrated red"]);
    assert!(intensity_of(&analysis, "tomato red").is_none());
}

#[test]
fn test_tomato_paste_quantity_weighting() {
    let analysis = AppearanceAnalyzer::analyze(&["3 cups tomato paste"]);

    let intensity = intensity_of(&analysis, "deep concentrated red").unwrap();
    assert!((intensity - 5.0).abs() < 1e-9);
    assert!(analysis
        .color_description
        .starts_with("deeply saturated deep concentrated red"));
    assert_eq!(analysis.liquid_base.as_deref(), Some("red tomato-based sauce"));
}

#[test]
fn test_no_liquid_base() {
    let analysis = AppearanceAnalyzer::analyze(&["1 tsp cumin", "black pepper to taste"]);

    assert!(analysis.liquid_base.is_none());
    assert!(!analysis.color_description.contains(" in a "));
    assert_eq!(
        analysis.dominant_colors,
        vec!["earthy tan-brown", "dark specks"]
    );
}

#[test]
fn test_last_liquid_base_wins() {
    let analysis = AppearanceAnalyzer::analyze(&["1 cup chicken broth", "2 cups water"]);
    assert_eq!(analysis.liquid_base.as_deref(), Some("clear light broth"));
}

#[test]
fn test_top_three_and_sentence_shape() {
    let analysis = AppearanceAnalyzer::analyze(&[
        "1 tsp turmeric",
        "handful of spinach",
        "some olives",
        "a few dates",
        "2 cups water",
    ]);

    assert_eq!(analysis.dominant_colors.len(), 3);
    assert_eq!(analysis.all_colors.len(), 4);
    assert_eq!(
        analysis.color_description,
        "rich golden yellow with hints of deep green and accents of dark purple-black in a clear light broth"
    );
}

#[test]
fn test_intensities_are_non_negative_and_ranked() {
    let analysis = AppearanceAnalyzer::analyze(&[
        "pinch of saffron",
        "4 large eggs",
        "a little mint",
        "1 small zucchini",
    ]);

    let intensities: Vec<f64> = analysis.all_colors.iter().map(|c| c.intensity).collect();
    assert!(intensities.iter().all(|i| *i >= 0.0));
    assert!(intensities.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_case_insensitive_matching() {
    let upper = AppearanceAnalyzer::analyze(&["2 TBSP HARISSA"]);
    let lower = AppearanceAnalyzer::analyze(&["2 tbsp harissa"]);
    assert_eq!(upper, lower);
}

#[test]
fn test_analyze_is_idempotent() {
    let ingredients = [
        "2 tbsp sweet paprika",
        "1 large tomato, chopped",
        "1 small onion, diced",
        "1 cup mhamsa (pearl couscous)",
        "1 tsp cumin",
        "black pepper to taste",
        "2 cups water",
    ];

    let first = AppearanceAnalyzer::analyze(&ingredients);
    let second = AppearanceAnalyzer::analyze(&ingredients);
    assert_eq!(first, second);
}

#[test]
fn test_texture_from_method_and_ingredients() {
    let texture = AppearanceAnalyzer::texture(&["fried onions", "couscous"], "fry until golden");

    assert!(texture.contains("crispy golden edges"));
    assert!(texture.contains("fluffy pearled grains"));
}

#[test]
fn test_texture_fallback() {
    assert_eq!(
        AppearanceAnalyzer::texture(&["salt"], ""),
        "appetizing home-cooked texture"
    );
}
