/// Fallback when neither the cooking method nor the ingredients suggest a texture.
pub const DEFAULT_TEXTURE: &str = "appetizing home-cooked texture";

const METHOD_TEXTURES: &[(&[&str], &str)] = &[
    (&["fry", "fried"], "crispy golden edges"),
    (&["stew", "simmer"], "tender slow-cooked"),
    (&["bake", "roast"], "beautifully caramelized"),
    (&["boil"], "soft and tender"),
];

const INGREDIENT_TEXTURES: &[(&[&str], &str)] = &[
    (&["couscous", "mhamsa"], "fluffy pearled grains"),
    (&["meat", "lamb", "beef"], "succulent braised meat"),
    (&["crisp", "crunch"], "satisfying crunch"),
];

/// Describe the expected texture of a dish.
///
/// Cooking-method phrases come first, followed by one phrase per matching
/// ingredient line, all joined with ", ".
pub fn texture_description<S: AsRef<str>>(ingredients: &[S], cooking_method: &str) -> String {
    let method = cooking_method.to_lowercase();

    let mut textures: Vec<&str> = METHOD_TEXTURES
        .iter()
        .filter(|(verbs, _)| verbs.iter().any(|verb| method.contains(verb)))
        .map(|(_, texture)| *texture)
        .collect();

    for ingredient in ingredients {
        let line = ingredient.as_ref().to_lowercase();
        textures.extend(
            INGREDIENT_TEXTURES
                .iter()
                .filter(|(keys, _)| keys.iter().any(|key| line.contains(key)))
                .map(|(_, texture)| *texture),
        );
    }

    if textures.is_empty() {
        DEFAULT_TEXTURE.to_string()
    } else {
        textures.join(", ")
    }
}
