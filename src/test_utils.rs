use crate::models::domain::{Category, Drink, Ingredient, Question};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a question with generated text
    pub fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question number {}?", id),
            answer: format!("Answer {}", id),
            category,
            difficulty: 1,
        }
    }

    /// Creates the standard trivia categories
    pub fn categories() -> Vec<Category> {
        ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
            .iter()
            .enumerate()
            .map(|(i, kind)| Category::new(i as i64 + 1, kind))
            .collect()
    }

    pub fn ingredient(name: &str, color: &str, parts: u32) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            color: color.to_string(),
            parts,
        }
    }

    /// Creates a two-ingredient drink with id 1
    pub fn latte() -> Drink {
        Drink::new(
            1,
            "Latte",
            vec![ingredient("Espresso", "brown", 1), ingredient("Milk", "white", 3)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_categories() {
        let categories = categories();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].id, 1);
        assert_eq!(categories[0].kind, "Science");
    }

    #[test]
    fn test_fixtures_latte() {
        let drink = latte();
        assert_eq!(drink.recipe.len(), 2);
        assert_eq!(drink.recipe[1].color, "white");
    }
}
