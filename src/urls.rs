//! Map-service URL templates for matched coordinates.
//!
//! Pure presentation: a fixed ordered list of literal templates with
//! `{lat}`/`{lon}` placeholders. Extending the list never touches the
//! extraction engine.

use crate::extract::coordinate::Coordinate;

/// Ordered output templates. The first entry is the plain pair itself.
pub const TEMPLATES: &[&str] = &[
    "{lat},{lon}",
    "http://wikimapia.org/#lat={lat}&lon={lon}&z=12&m=b",
    "http://hikebikemap.org/?zoom=12&lat={lat}&lon={lon}&layers=B0000FFFFF",
    "http://www.openstreetmap.org/#map=14/{lat}/{lon}",
    "http://labs.strava.com/heatmap/#13/{lon}/{lat}/gray/both",
    "http://here.com/{lat},{lon},15,0,0,normal.day",
    "http://tools.wmflabs.org/geohack/geohack.php?params={lat};{lon}",
    "https://www.google.com/maps/@{lat},{lon},16z",
];

/// Render every template for a coordinate, in order.
pub fn render(coordinate: &Coordinate) -> Vec<String> {
    let lat = coordinate.latitude();
    let lon = coordinate.longitude();
    TEMPLATES
        .iter()
        .map(|template| template.replace("{lat}", &lat).replace("{lon}", &lon))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;

    #[test]
    fn test_render_substitutes_both_axes() {
        let coordinate = extract::find("49.440603,11.004759").unwrap();
        let rendered = render(&coordinate);
        assert_eq!(rendered.len(), TEMPLATES.len());
        assert_eq!(rendered[0], "49.440603,11.004759");
        assert!(rendered
            .iter()
            .skip(1)
            .all(|url| url.contains("49.440603") && url.contains("11.004759")));
        // Strava takes longitude first.
        let strava = rendered
            .iter()
            .find(|url| url.contains("strava"))
            .expect("strava template");
        assert!(strava.contains("#13/11.004759/49.440603/"));
    }
}
