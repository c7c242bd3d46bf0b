use crate::models::catalog::{Destination, InterestCategory};

/// Popular destinations suggested on the planning form.
pub fn popular_destinations() -> Vec<Destination> {
    vec![
        destination(
            "Tokyo, Japan",
            "Urban Culture",
            "tokyo.jpg",
            &["Technology", "Food", "Culture", "Shopping"],
            "Spring/Fall",
        ),
        destination(
            "Paris, France",
            "Romance & Art",
            "paris.jpg",
            &["Museums", "Architecture", "Cuisine", "History"],
            "Spring/Summer",
        ),
        destination(
            "Bali, Indonesia",
            "Nature & Relaxation",
            "bali.jpg",
            &["Beaches", "Temples", "Nature", "Wellness"],
            "Dry Season",
        ),
        destination(
            "New York, USA",
            "Urban Adventure",
            "nyc.jpg",
            &["Entertainment", "Food", "Museums", "Shopping"],
            "Spring/Fall",
        ),
    ]
}

/// Interest options grouped the way the planning form shows them.
pub fn interest_categories() -> Vec<InterestCategory> {
    [
        ("Adventure", ["Hiking", "Water Sports", "Extreme Sports", "Rock Climbing", "Skiing"]),
        ("Culture", ["Museums", "Historical Sites", "Art Galleries", "Local Festivals", "Architecture"]),
        ("Food & Drink", ["Fine Dining", "Street Food", "Wine Tasting", "Cooking Classes", "Local Markets"]),
        ("Nature", ["National Parks", "Wildlife", "Beaches", "Mountains", "Gardens"]),
        ("Entertainment", ["Nightlife", "Live Music", "Theater", "Casinos", "Theme Parks"]),
        ("Relaxation", ["Spas", "Yoga Retreats", "Beach Resorts", "Hot Springs", "Meditation"]),
        ("Shopping", ["Local Markets", "Luxury Shopping", "Vintage Stores", "Artisan Crafts", "Souvenirs"]),
        ("Photography", ["Scenic Views", "Architecture", "Wildlife", "Street Photography", "Sunrise/Sunset"]),
    ]
    .into_iter()
    .map(|(name, interests)| InterestCategory {
        name: name.to_string(),
        interests: interests.iter().map(|i| i.to_string()).collect(),
    })
    .collect()
}

fn destination(
    name: &str,
    category: &str,
    image: &str,
    highlights: &[&str],
    best_season: &str,
) -> Destination {
    Destination {
        name: name.to_string(),
        category: category.to_string(),
        image: image.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        best_season: best_season.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let destinations = popular_destinations();
        assert_eq!(destinations.len(), 4);
        assert!(destinations.iter().all(|d| !d.highlights.is_empty()));

        let categories = interest_categories();
        assert_eq!(categories.len(), 8);
        assert_eq!(categories[0].name, "Adventure");
        assert!(categories.iter().all(|c| c.interests.len() == 5));
    }
}
