//! Catalog validation for recipe documents

use crate::schema::Catalog;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Recipe name cannot be empty")]
    EmptyRecipeName,

    #[error("Recipe '{0}' requires no alcohol and can never be suggested")]
    NoAlcohols(String),

    #[error("Recipe '{recipe}' has a blank ingredient name '{ingredient}'")]
    BlankIngredient { recipe: String, ingredient: String },
}

/// Validate every recipe of a catalog, collecting all findings.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (name, recipe) in catalog.iter() {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyRecipeName);
        }

        if !recipe.is_matchable() {
            errors.push(ValidationError::NoAlcohols(name.to_string()));
        }

        for ingredient in recipe.alcohols.keys().chain(recipe.others.keys()) {
            if ingredient.trim().is_empty() {
                errors.push(ValidationError::BlankIngredient {
                    recipe: name.to_string(),
                    ingredient: ingredient.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_catalog;

    #[test]
    fn test_valid_catalog() {
        let catalog = parse_catalog(
            r#"{"Daiquiri": {"alcohols": {"Rhum blanc": "6 cl"}, "others": {"Sucre": "2 cl"}}}"#,
        )
        .unwrap();
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(validate_catalog(&Catalog::empty()).is_ok());
    }

    #[test]
    fn test_recipe_without_alcohols() {
        let catalog = parse_catalog(r#"{"Shirley Temple": {"others": {"Grenadine": "1 cl"}}}"#)
            .unwrap();
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::NoAlcohols("Shirley Temple".to_string())]
        );
    }

    #[test]
    fn test_whitespace_recipe_name() {
        let catalog = parse_catalog(r#"{"  ": {"alcohols": {"Gin": "4 cl"}}}"#).unwrap();
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::EmptyRecipeName)));
    }

    #[test]
    fn test_blank_ingredient() {
        let catalog =
            parse_catalog(r#"{"Gimlet": {"alcohols": {"Gin": "5 cl"}, "others": {"": "2 cl"}}}"#)
                .unwrap();
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::BlankIngredient { recipe, ingredient }
                if recipe == "Gimlet" && ingredient.is_empty()
        )));
    }

    #[test]
    fn test_each_blank_ingredient_reported() {
        let catalog = parse_catalog(
            r#"{"Collins": {"alcohols": {"Gin": "5 cl", " ": "1 cl"}, "others": {"": "2 cl"}}}"#,
        )
        .unwrap();
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::BlankIngredient {
                    recipe: "Collins".to_string(),
                    ingredient: " ".to_string(),
                },
                ValidationError::BlankIngredient {
                    recipe: "Collins".to_string(),
                    ingredient: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_multiple_errors_collected() {
        let catalog = parse_catalog(
            r#"{
                "A": {"others": {}},
                "B": {"alcohols": {" ": "1 cl"}}
            }"#,
        )
        .unwrap();
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
