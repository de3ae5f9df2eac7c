//! # Bank
//!
//! In-memory menu data.
//!
//! The bank is loaded once at startup and owned by the server state. It can
//! be read from a `db.json`-shaped file or fall back to the built-in seed
//! of four dishes, one promotion and four leaders.
//!
//! Read access goes through [`MenuSource`], the explicit interface the
//! handlers consume instead of reaching into the bank's fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Comment, Dish, Leader, Promotion};

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Failed to read bank file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed bank file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read interface over the menu data.
pub trait MenuSource {
    /// Dish ids in bank order; this order defines navigation adjacency.
    fn dish_ids(&self) -> Vec<String>;
    fn dishes(&self) -> &[Dish];
    fn dish(&self, id: &str) -> Option<&Dish>;
    fn featured_dish(&self) -> Option<&Dish>;
    fn promotions(&self) -> &[Promotion];
    fn promotion(&self, id: &str) -> Option<&Promotion>;
    fn featured_promotion(&self) -> Option<&Promotion>;
    fn leaders(&self) -> &[Leader];
    fn featured_leader(&self) -> Option<&Leader>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    pub dishes: Vec<Dish>,
    pub promotions: Vec<Promotion>,
    pub leaders: Vec<Leader>,
}

impl Bank {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let data = fs::read_to_string(path)?;

        Ok(serde_json::from_str(&data)?)
    }

    /// Append a comment to a dish, returning the updated dish.
    pub fn add_comment(&mut self, dish_id: &str, comment: Comment) -> Option<&Dish> {
        let dish = self.dishes.iter_mut().find(|dish| dish.id == dish_id)?;

        dish.comments.push(comment);

        Some(dish)
    }

    pub fn seeded() -> Self {
        Self {
            dishes: seed_dishes(),
            promotions: seed_promotions(),
            leaders: seed_leaders(),
        }
    }
}

impl MenuSource for Bank {
    fn dish_ids(&self) -> Vec<String> {
        self.dishes.iter().map(|dish| dish.id.clone()).collect()
    }

    fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    fn dish(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    fn featured_dish(&self) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.featured)
    }

    fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    fn promotion(&self, id: &str) -> Option<&Promotion> {
        self.promotions.iter().find(|promo| promo.id == id)
    }

    fn featured_promotion(&self) -> Option<&Promotion> {
        self.promotions.iter().find(|promo| promo.featured)
    }

    fn leaders(&self) -> &[Leader] {
        &self.leaders
    }

    fn featured_leader(&self) -> Option<&Leader> {
        self.leaders.iter().find(|leader| leader.featured)
    }
}

fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            rating: 5,
            comment: "Imagine all the eatables, living in conFusion!".to_string(),
            author: "John Lemon".to_string(),
            date: "2012-10-16T17:57:28.556094Z".to_string(),
        },
        Comment {
            rating: 4,
            comment: "Sends anyone to heaven, I wish I could get my mother-in-law to eat it!"
                .to_string(),
            author: "Paul McVites".to_string(),
            date: "2014-09-05T17:57:28.556094Z".to_string(),
        },
        Comment {
            rating: 3,
            comment: "Eat it, just eat it!".to_string(),
            author: "Michael Jaikishan".to_string(),
            date: "2015-02-13T17:57:28.556094Z".to_string(),
        },
        Comment {
            rating: 4,
            comment: "Ultimate, Reaching for the stars!".to_string(),
            author: "Ringo Starry".to_string(),
            date: "2013-12-02T17:57:28.556094Z".to_string(),
        },
        Comment {
            rating: 2,
            comment: "It's your birthday, we're gonna party!".to_string(),
            author: "25 Cent".to_string(),
            date: "2011-12-02T17:57:28.556094Z".to_string(),
        },
    ]
}

fn seed_dishes() -> Vec<Dish> {
    vec![
        Dish {
            id: "uthappizza".to_string(),
            name: "Uthappizza".to_string(),
            image: "/assets/images/uthappizza.png".to_string(),
            category: "mains".to_string(),
            label: "Hot".to_string(),
            price: "4.99".to_string(),
            featured: true,
            description: "A unique combination of Indian Uthappam (pancake) and Italian pizza."
                .to_string(),
            comments: seed_comments(),
        },
        Dish {
            id: "zucchipakoda".to_string(),
            name: "Zucchipakoda".to_string(),
            image: "/assets/images/zucchipakoda.png".to_string(),
            category: "appetizer".to_string(),
            label: String::new(),
            price: "1.99".to_string(),
            featured: false,
            description: "Deep fried Zucchini coated with mildly spiced Chickpea flour batter \
                          accompanied with a sweet tamarind sauce."
                .to_string(),
            comments: seed_comments(),
        },
        Dish {
            id: "vadonut".to_string(),
            name: "Vadonut".to_string(),
            image: "/assets/images/vadonut.png".to_string(),
            category: "appetizer".to_string(),
            label: "New".to_string(),
            price: "1.99".to_string(),
            featured: false,
            description: "A quintessential conFusion experience, is it a vada or is it a donut?"
                .to_string(),
            comments: seed_comments(),
        },
        Dish {
            id: "elaicheesecake".to_string(),
            name: "ElaiCheese Cake".to_string(),
            image: "/assets/images/elaicheesecake.png".to_string(),
            category: "dessert".to_string(),
            label: String::new(),
            price: "2.99".to_string(),
            featured: false,
            description: "A delectable, semi-sweet New York style cheesecake, with Graham cracker \
                          crust and spiced with Indian cardamoms."
                .to_string(),
            comments: seed_comments(),
        },
    ]
}

fn seed_promotions() -> Vec<Promotion> {
    vec![Promotion {
        id: "weekendgrandbuffet".to_string(),
        name: "Weekend Grand Buffet".to_string(),
        image: "/assets/images/buffet.png".to_string(),
        label: "New".to_string(),
        price: "19.99".to_string(),
        featured: true,
        description: "Featuring mouthwatering combinations with a choice of five different \
                      salads, six enticing appetizers, six main entrees and five choicest \
                      desserts. Free flowing bubbly and soft drinks. All for just $19.99 per \
                      person."
            .to_string(),
    }]
}

fn seed_leaders() -> Vec<Leader> {
    vec![
        Leader {
            id: "peter".to_string(),
            name: "Peter Pan".to_string(),
            image: "/assets/images/alberto.png".to_string(),
            designation: "Chief Epicurious Officer".to_string(),
            abbr: "CEO".to_string(),
            featured: false,
            description: "Our CEO, Peter, credits his hardworking East Asian immigrant parents \
                          who undertook the arduous journey to the shores of America with the \
                          intention of giving their children the best future. His mother's \
                          wizardy in the kitchen whipping up the tastiest dishes with whatever \
                          is available inexpensively at the supermarket, was his first \
                          inspiration to create the fusion cuisines for which The Frying Pan is \
                          well known."
                .to_string(),
        },
        Leader {
            id: "dhanasekaran".to_string(),
            name: "Dhanasekaran Witherspoon".to_string(),
            image: "/assets/images/alberto.png".to_string(),
            designation: "Chief Food Officer".to_string(),
            abbr: "CFO".to_string(),
            featured: false,
            description: "Our CFO, Danny, as he is affectionately referred to by his colleagues, \
                          comes from a long established family tradition in farming and farm \
                          produce. His experiences growing up on a farm in the Australian \
                          outback gave him great appreciation for varieties of food sources."
                .to_string(),
        },
        Leader {
            id: "agumbe".to_string(),
            name: "Agumbe Tang".to_string(),
            image: "/assets/images/alberto.png".to_string(),
            designation: "Chief Taste Officer".to_string(),
            abbr: "CTO".to_string(),
            featured: false,
            description: "Blessed with the most discerning gustatory sense, Agumbe, our CTO, \
                          personally ensures that every dish that we serve meets his exacting \
                          tastes."
                .to_string(),
        },
        Leader {
            id: "alberto".to_string(),
            name: "Alberto Somayya".to_string(),
            image: "/assets/images/alberto.png".to_string(),
            designation: "Executive Chef".to_string(),
            abbr: "EC".to_string(),
            featured: true,
            description: "Award winning three-star Michelin chef with wide international \
                          experience having worked closely with whos-who in the culinary world, \
                          he specializes in creating mouthwatering Indian and Italian fusion \
                          experiences."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_carries_the_full_menu() {
        let bank = Bank::seeded();

        assert_eq!(bank.dishes().len(), 4);
        assert_eq!(bank.promotions().len(), 1);
        assert_eq!(bank.leaders().len(), 4);
    }

    #[test]
    fn dish_ids_preserve_bank_order() {
        let bank = Bank::seeded();

        assert_eq!(
            bank.dish_ids(),
            vec!["uthappizza", "zucchipakoda", "vadonut", "elaicheesecake"]
        );
    }

    #[test]
    fn promotion_lookup_by_id() {
        let bank = Bank::seeded();

        assert_eq!(
            bank.promotion("weekendgrandbuffet").unwrap().name,
            "Weekend Grand Buffet"
        );
        assert!(bank.promotion("happyhour").is_none());
    }

    #[test]
    fn featured_lookups() {
        let bank = Bank::seeded();

        assert_eq!(bank.featured_dish().unwrap().id, "uthappizza");
        assert_eq!(bank.featured_promotion().unwrap().id, "weekendgrandbuffet");
        assert_eq!(bank.featured_leader().unwrap().id, "alberto");
    }

    #[test]
    fn add_comment_appends_to_the_dish() {
        let mut bank = Bank::seeded();

        let comment = Comment {
            rating: 5,
            comment: "Yum.".to_string(),
            author: "A. Diner".to_string(),
            date: "2026-01-01T00:00:00Z".to_string(),
        };

        let dish = bank.add_comment("vadonut", comment).unwrap();
        assert_eq!(dish.comments.len(), 6);
        assert_eq!(dish.comments.last().unwrap().author, "A. Diner");
    }

    #[test]
    fn add_comment_to_unknown_dish_is_none() {
        let mut bank = Bank::seeded();

        let comment = Comment {
            rating: 1,
            comment: "?".to_string(),
            author: "Nobody".to_string(),
            date: "2026-01-01T00:00:00Z".to_string(),
        };

        assert!(bank.add_comment("croissant", comment).is_none());
    }

    #[test]
    fn bank_round_trips_through_json() {
        let bank = Bank::seeded();

        let encoded = serde_json::to_string(&bank).unwrap();
        let decoded: Bank = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.dishes, bank.dishes);
        assert_eq!(decoded.promotions, bank.promotions);
        assert_eq!(decoded.leaders, bank.leaders);
    }
}
