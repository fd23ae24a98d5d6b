//! Gallery-style titles for rendered SVGs.

use rand::seq::SliceRandom;
use rand::Rng;

const FIRST: [&str; 10] = [
    "Starry",
    "Electric",
    "Derelict",
    "Infused",
    "Vibrating",
    "Dormant",
    "Portland",
    "Seductive",
    "Bourgeois",
    "Quiet",
];

const SECOND: [&str; 10] = [
    "Plight",
    "Hue",
    "Transcendence",
    "Carousel",
    "Conversation",
    "Privilege",
    "Fallacy",
    "Exploration",
    "Episode",
    "Harbor",
];

/// `"<adjective> <noun> No. <134..=768>"`.
pub fn random_title<R: Rng>(rng: &mut R) -> String {
    let first = FIRST.choose(rng).copied().unwrap_or("Untitled");
    let second = SECOND.choose(rng).copied().unwrap_or("Mosaic");
    let number = rng.gen_range(134..=768);
    format!("{first} {second} No. {number}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn titles_are_seeded_and_well_formed() {
        let a = random_title(&mut StdRng::seed_from_u64(3));
        let b = random_title(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
        let (words, number) = a.split_once(" No. ").unwrap();
        assert_eq!(words.split(' ').count(), 2);
        let n: u32 = number.parse().unwrap();
        assert!((134..=768).contains(&n));
    }
}
