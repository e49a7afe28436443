//! Static lookup tables used by the appearance analyzer.
//!
//! Keys are lower-case and matched as plain substrings of a lower-cased
//! ingredient line.

/// Keyword → (color description, base intensity)
pub const COLOR_INGREDIENTS: &[(&str, &str, f64)] = &[
    // Red/Orange spectrum
    ("paprika", "warm orange-red", 1.5),
    ("sweet paprika", "warm orange-red", 1.5),
    ("hot paprika", "deep rusty red", 1.8),
    ("tomato", "tomato red", 1.0),
    ("tomatoes", "tomato red", 1.0),
    ("tomato paste", "deep concentrated red", 2.5),
    ("tomato sauce", "rich red", 1.8),
    ("harissa", "fiery deep red", 2.0),
    ("red pepper", "bright red", 1.2),
    ("bell pepper", "vibrant red/yellow/green", 0.8),
    ("cayenne", "reddish-brown heat", 1.0),
    // Yellow/Golden spectrum
    ("turmeric", "golden yellow", 2.0),
    ("saffron", "luxurious golden-orange", 2.5),
    ("cumin", "earthy tan-brown", 0.8),
    ("curry", "warm golden-yellow", 1.8),
    ("egg", "golden yellow", 1.0),
    ("eggs", "golden yellow", 1.0),
    ("olive oil", "golden sheen", 0.5),
    // Green spectrum
    ("parsley", "fresh green flecks", 0.6),
    ("cilantro", "bright green herbs", 0.6),
    ("coriander", "fresh green", 0.5),
    ("mint", "bright green accents", 0.5),
    ("spinach", "deep green", 1.5),
    ("zucchini", "pale green", 0.8),
    ("peas", "bright green dots", 0.7),
    ("green beans", "vibrant green", 1.0),
    // Brown spectrum
    ("cinnamon", "warm brown tones", 0.6),
    ("meat", "rich brown", 1.2),
    ("beef", "deep brown", 1.3),
    ("lamb", "rich reddish-brown", 1.2),
    ("chicken", "golden-brown", 1.0),
    ("onion", "caramelized golden-brown", 0.8),
    ("onions", "caramelized golden-brown", 0.8),
    ("fried onion", "deep golden-brown", 1.2),
    // White/Cream spectrum
    ("cream", "creamy white", 0.8),
    ("milk", "milky white", 0.6),
    ("yogurt", "creamy white", 0.7),
    ("tahini", "beige-cream", 0.8),
    ("semolina", "pale golden", 0.5),
    ("couscous", "pale golden grains", 0.6),
    ("mhamsa", "toasted golden pearls", 0.7),
    ("rice", "white/pale", 0.4),
    ("potato", "creamy pale", 0.5),
    ("potatoes", "creamy pale", 0.5),
    ("chickpeas", "beige-tan", 0.6),
    // Dark spectrum
    ("black pepper", "dark specks", 0.3),
    ("olives", "dark purple-black", 0.7),
    ("raisins", "dark brown accents", 0.5),
    ("dates", "dark caramel brown", 0.6),
];

/// Keyword → description of the sauce or broth the dish sits in
pub const LIQUID_BASES: &[(&str, &str)] = &[
    ("tomato", "red tomato-based sauce"),
    ("water", "clear light broth"),
    ("broth", "golden clear broth"),
    ("stock", "rich golden stock"),
    ("olive oil", "glistening oil coating"),
    ("cream", "creamy white sauce"),
    ("milk", "milky white liquid"),
];

/// Quantity keyword → intensity multiplier
pub const QUANTITY_PATTERNS: &[(&str, f64)] = &[
    ("large", 1.5),
    ("generous", 1.5),
    ("heaping", 1.4),
    ("2", 1.5),
    ("3", 2.0),
    ("4", 2.5),
    ("cup", 1.5),
    ("cups", 2.0),
    ("tbsp", 1.0),
    ("tablespoon", 1.0),
    ("tsp", 0.5),
    ("teaspoon", 0.5),
    ("pinch", 0.2),
    ("dash", 0.3),
    ("small", 0.6),
    ("little", 0.4),
];

/// Leading words that already describe how strong a color is.
pub const INTENSITY_ADJECTIVES: &[&str] =
    &["warm", "rich", "deep", "bright", "vibrant", "pale", "dark"];

/// Color catalog entries ordered longest keyword first.
///
/// The sort is stable, so keywords of equal length keep catalog order.
pub fn colors_by_specificity() -> Vec<&'static (&'static str, &'static str, f64)> {
    let mut entries: Vec<_> = COLOR_INGREDIENTS.iter().collect();
    entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    entries
}
