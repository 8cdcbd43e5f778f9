//! Generated placeholder avatars.
//!
//! Users without an uploaded profile image get a `placehold.co` URL showing their initials on
//! a random emerald background. The text color is picked from the background lightness so the
//! initials stay readable.

use rand::Rng;

const PLACEHOLDER_HOST: &str = "placehold.co";

/// Up to two uppercased initials, one per whitespace separated word
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Converts an HSL color to a 6 digit uppercase hex string without `#`
///
/// # Arguments
/// - `h` - Hue in degrees, `0..360`
/// - `s` - Saturation in percent, `0..=100`
/// - `l` - Lightness in percent, `0..=100`
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);

    let channel = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * color).round() as u8
    };

    format!("{:02X}{:02X}{:02X}", channel(0.0), channel(8.0), channel(4.0))
}

/// Text color giving enough contrast on a background of lightness `l` percent
pub fn text_color(l: u32) -> &'static str {
    if l < 45 {
        "FFFFFF"
    } else if l < 55 {
        "FFBF00"
    } else {
        "000000"
    }
}

/// Builds a placeholder avatar URL for `name` with a random emerald background
pub fn placeholder_image_url(name: &str) -> String {
    placeholder_image_url_with(name, &mut rand::rng())
}

/// Same as [`placeholder_image_url`] with the randomness source supplied by the caller
pub fn placeholder_image_url_with<R: Rng>(name: &str, rng: &mut R) -> String {
    let h: u32 = rng.random_range(140..160);
    let s: u32 = rng.random_range(70..100);
    let l: u32 = rng.random_range(40..60);

    let background = hsl_to_hex(f64::from(h), f64::from(s), f64::from(l));

    format!(
        "https://{}/150x150/{}/{}?text={}&font=inter",
        PLACEHOLDER_HOST,
        background,
        text_color(l),
        initials(name)
    )
}

/// Whether `image` is a generated placeholder rather than an uploaded image
pub fn is_placeholder_image(image: &str) -> bool {
    image.contains(PLACEHOLDER_HOST) && image.contains("?text=")
}
