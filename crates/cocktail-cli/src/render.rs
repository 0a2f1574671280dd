//! Plain-text rendering of match results

use cocktail_core::{CocktailMatch, Recipe};

const HEADERS: [&str; 3] = ["Cocktail", "Ingredients", "To buy"];

/// `name: quantity` lines for one ingredient map.
fn ingredient_lines<'a>(ingredients: impl Iterator<Item = (&'a String, &'a String)>) -> Vec<String> {
    ingredients
        .map(|(name, quantity)| format!("{}: {}", name, quantity))
        .collect()
}

fn to_buy(recipe: &Recipe) -> Vec<String> {
    let lines = ingredient_lines(recipe.others.iter());
    if lines.is_empty() {
        vec!["None".to_string()]
    } else {
        lines
    }
}

/// One table row per cocktail; cells may span several lines.
fn rows(matches: &[CocktailMatch<'_>]) -> Vec<[Vec<String>; 3]> {
    matches
        .iter()
        .map(|m| {
            [
                vec![m.name.to_string()],
                ingredient_lines(m.recipe.alcohols.iter()),
                to_buy(m.recipe),
            ]
        })
        .collect()
}

/// Render matches as a three-column table: cocktail, required spirits and
/// the other ingredients to buy.
pub fn render_table(matches: &[CocktailMatch<'_>]) -> String {
    let rows = rows(matches);

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            let longest = cell.iter().map(|line| line.chars().count()).max();
            *width = (*width).max(longest.unwrap_or(0));
        }
    }

    let mut out = String::new();
    push_line(&mut out, &widths, HEADERS);
    let rule = widths.map(|w| "-".repeat(w));
    push_line(&mut out, &widths, rule.each_ref().map(String::as_str));

    for row in &rows {
        let height = row.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..height {
            let cells = [0, 1, 2].map(|col| row[col].get(i).map(String::as_str).unwrap_or(""));
            push_line(&mut out, &widths, cells);
        }
    }
    out
}

fn push_line(out: &mut String, widths: &[usize; 3], cells: [&str; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use cocktail_core::{MatchEngine, ReferenceTables};
    use cocktail_recipe::parse_catalog;

    #[test]
    fn test_render_lists_ingredients_per_line() {
        let catalog = parse_catalog(
            r#"{"Mojito": {
                "alcohols": {"Rhum blanc": "5 cl"},
                "others": {"Menthe": "8 feuilles", "Citron vert": "1/2"}
            }}"#,
        )
        .unwrap();
        let engine = MatchEngine::new(ReferenceTables::builtin());
        let matches = engine.find_matches(["Rhum blanc"], &catalog);

        let table = render_table(&matches);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Cocktail"));
        assert!(lines[2].starts_with("Mojito"));
        assert!(lines[2].contains("Rhum blanc: 5 cl"));
        assert!(lines[2].ends_with("Menthe: 8 feuilles"));
        assert!(lines[3].ends_with("Citron vert: 1/2"));
    }

    #[test]
    fn test_render_none_when_nothing_to_buy() {
        let catalog =
            parse_catalog(r#"{"Ti' Punch": {"alcohols": {"Rhum blanc": "5 cl"}}}"#).unwrap();
        let engine = MatchEngine::new(ReferenceTables::builtin());
        let matches = engine.find_matches(["Rhum blanc"], &catalog);

        let table = render_table(&matches);
        assert!(table.lines().nth(2).unwrap().ends_with("| None"));
    }

    #[test]
    fn test_render_columns_aligned() {
        let catalog = parse_catalog(
            r#"{
                "Gimlet": {"alcohols": {"Gin": "5 cl"}, "others": {"Lime cordial": "2 cl"}},
                "Negroni": {"alcohols": {"Gin": "3 cl", "Campari": "3 cl"}, "others": {"Vermouth rouge": "3 cl"}}
            }"#,
        )
        .unwrap();
        let engine = MatchEngine::new(ReferenceTables::builtin());
        let matches = engine.find_matches(["Gin", "Campari"], &catalog);

        let table = render_table(&matches);
        let separators: Vec<usize> = table
            .lines()
            .filter(|line| line.contains('|'))
            .map(|line| line.find('|').unwrap())
            .collect();
        assert!(separators.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_empty_matches_has_only_header() {
        assert_eq!(render_table(&[]).lines().count(), 2);
    }
}
