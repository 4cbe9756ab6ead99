//! Built-in sample dataset: eight listeners rating eight bands.
//!
//! Used by the CLI when no data file is given, and as a shared fixture in tests.

use crate::types::{Dataset, RatingProfile};

/// The classic music ratings example (ratings on a 1.0 - 5.0 scale)
pub fn song_ratings() -> Dataset {
    let rows: [(&str, &[(&str, f64)]); 8] = [
        (
            "Angelica",
            &[
                ("Blues Traveler", 3.5),
                ("Broken Bells", 2.0),
                ("Norah Jones", 4.5),
                ("Phoenix", 5.0),
                ("Slightly Stoopid", 1.5),
                ("The Strokes", 2.5),
                ("Vampire Weekend", 2.0),
            ],
        ),
        (
            "Bill",
            &[
                ("Blues Traveler", 2.0),
                ("Broken Bells", 3.5),
                ("Deadmau5", 4.0),
                ("Phoenix", 2.0),
                ("Slightly Stoopid", 3.5),
                ("Vampire Weekend", 3.0),
            ],
        ),
        (
            "Chan",
            &[
                ("Blues Traveler", 5.0),
                ("Broken Bells", 1.0),
                ("Deadmau5", 1.0),
                ("Norah Jones", 3.0),
                ("Phoenix", 5.0),
                ("Slightly Stoopid", 1.0),
            ],
        ),
        (
            "Dan",
            &[
                ("Blues Traveler", 3.0),
                ("Broken Bells", 4.0),
                ("Deadmau5", 4.5),
                ("Phoenix", 3.0),
                ("Slightly Stoopid", 4.5),
                ("The Strokes", 4.0),
                ("Vampire Weekend", 2.0),
            ],
        ),
        (
            "Hailey",
            &[
                ("Broken Bells", 4.0),
                ("Deadmau5", 1.0),
                ("Norah Jones", 4.0),
                ("The Strokes", 4.0),
                ("Vampire Weekend", 1.0),
            ],
        ),
        (
            "Jordyn",
            &[
                ("Broken Bells", 4.5),
                ("Deadmau5", 4.0),
                ("Norah Jones", 5.0),
                ("Phoenix", 5.0),
                ("Slightly Stoopid", 4.5),
                ("The Strokes", 4.0),
                ("Vampire Weekend", 4.0),
            ],
        ),
        (
            "Sam",
            &[
                ("Blues Traveler", 5.0),
                ("Broken Bells", 2.0),
                ("Norah Jones", 3.0),
                ("Phoenix", 5.0),
                ("Slightly Stoopid", 4.0),
                ("The Strokes", 5.0),
            ],
        ),
        (
            "Veronica",
            &[
                ("Blues Traveler", 3.0),
                ("Norah Jones", 5.0),
                ("Phoenix", 4.0),
                ("Slightly Stoopid", 2.5),
                ("The Strokes", 3.0),
            ],
        ),
    ];

    rows.into_iter()
        .map(|(user, ratings)| {
            let profile: RatingProfile = ratings.iter().copied().collect();
            (user, profile)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_ratings_shape() {
        let dataset = song_ratings();
        let (users, items, ratings) = dataset.counts();

        assert_eq!(users, 8);
        assert_eq!(items, 8);
        assert_eq!(ratings, 49);
        assert!(dataset.validate().is_ok());
    }
}
