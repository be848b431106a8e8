//! Property search: an optional-field filter, its SQL condition and the exact in-memory predicate.

use configs::NameMatch;
use models::property;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, Condition};
use serde::{Deserialize, Deserializer};

/// Conjunction of the present predicates. An absent field, or a blank `name`,
/// does not narrow the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PropertyFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub min_price: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_price: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub year: Option<i32>,
    pub name: Option<String>,
}

/// Form-style clients send `min_price=` for "no bound"; treat that as absent.
fn blank_as_none<'de, D: Deserializer<'de>>(de: D) -> Result<Option<i32>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i32),
        Text(String),
    }
    match Option::<Raw>::deserialize(de)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(t)) if t.trim().is_empty() => Ok(None),
        Some(Raw::Text(t)) => t
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got `{t}`"))),
    }
}

impl PropertyFilter {
    /// The name substring to look for, if it constrains anything.
    pub fn name_needle(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.min_price.is_none() && self.max_price.is_none() && self.year.is_none() && self.name_needle().is_none()
    }

    /// Exact predicate; every row returned by a store satisfies it.
    pub fn matches(&self, row: &property::Model, mode: NameMatch) -> bool {
        if self.min_price.is_some_and(|min| row.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| row.price > max) {
            return false;
        }
        if self.year.is_some_and(|year| row.year != year) {
            return false;
        }
        match self.name_needle() {
            None => true,
            Some(needle) => match mode {
                NameMatch::CaseSensitive => row.name.contains(needle),
                NameMatch::CaseInsensitive => row.name.to_lowercase().contains(&needle.to_lowercase()),
            },
        }
    }

    /// SQL narrowing for the store. Price and year are exact; the name is pushed
    /// down only in case-sensitive mode since `LIKE` collation differs per backend.
    pub fn condition(&self, mode: NameMatch) -> Condition {
        let mut cond = Condition::all();
        if let Some(min) = self.min_price {
            cond = cond.add(property::Column::Price.gte(min));
        }
        if let Some(max) = self.max_price {
            cond = cond.add(property::Column::Price.lte(max));
        }
        if let Some(year) = self.year {
            cond = cond.add(property::Column::Year.eq(year));
        }
        if let (Some(needle), NameMatch::CaseSensitive) = (self.name_needle(), mode) {
            let pattern = format!("%{}%", escape_like(needle));
            cond = cond.add(property::Column::Name.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)));
        }
        cond
    }
}

/// Escape character used in pushed-down `LIKE` patterns. Needs no quoting in any dialect.
pub const LIKE_ESCAPE: char = '!';

/// Escape `LIKE` wildcards so the needle matches literally.
pub fn escape_like(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    fn row(id: i32, name: &str, price: i32, year: i32) -> property::Model {
        property::Model {
            id,
            name: name.into(),
            address: "addr".into(),
            price,
            code_internal: format!("C{id}"),
            year,
            owner_id: 1,
        }
    }

    fn apply(filter: &PropertyFilter, rows: &[property::Model], mode: NameMatch) -> Vec<i32> {
        rows.iter().filter(|r| filter.matches(r, mode)).map(|r| r.id).collect()
    }

    #[test]
    fn min_price_and_year_select_the_two_recent_rows() {
        let rows = vec![row(1, "A", 500, 2015), row(2, "B", 1500, 2020), row(3, "C", 2000, 2020)];
        let f = PropertyFilter { min_price: Some(1000), year: Some(2020), ..Default::default() };
        assert_eq!(apply(&f, &rows, NameMatch::CaseSensitive), vec![2, 3]);
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let rows = vec![row(1, "A", 500, 2015), row(2, "B", 1500, 2020)];
        let f = PropertyFilter::default();
        assert!(f.is_empty());
        assert_eq!(apply(&f, &rows, NameMatch::CaseSensitive).len(), rows.len());
    }

    #[test]
    fn blank_name_imposes_no_constraint() {
        let rows = vec![row(1, "Villa", 500, 2015)];
        let f = PropertyFilter { name: Some("   ".into()), ..Default::default() };
        assert!(f.name_needle().is_none());
        assert!(f.is_empty());
        assert_eq!(apply(&f, &rows, NameMatch::CaseSensitive), vec![1]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let rows = vec![row(1, "A", 100, 2000), row(2, "B", 200, 2000), row(3, "C", 300, 2000)];
        let f = PropertyFilter { min_price: Some(100), max_price: Some(200), ..Default::default() };
        assert_eq!(apply(&f, &rows, NameMatch::CaseSensitive), vec![1, 2]);
    }

    #[test]
    fn name_match_mode_controls_case() {
        let rows = vec![row(1, "Modern Villa", 1, 2000), row(2, "villa rustica", 1, 2000)];
        let f = PropertyFilter { name: Some("Villa".into()), ..Default::default() };
        assert_eq!(apply(&f, &rows, NameMatch::CaseSensitive), vec![1]);
        assert_eq!(apply(&f, &rows, NameMatch::CaseInsensitive), vec![1, 2]);
    }

    #[test]
    fn blank_numeric_fields_deserialize_as_absent() {
        let f: PropertyFilter = serde_json::from_value(serde_json::json!({"min_price": "", "year": " ", "name": ""})).unwrap();
        assert_eq!(f, PropertyFilter { name: Some(String::new()), ..Default::default() });
        assert!(f.is_empty());

        let f: PropertyFilter = serde_json::from_value(serde_json::json!({"min_price": "1000", "max_price": 5000})).unwrap();
        assert_eq!((f.min_price, f.max_price, f.year), (Some(1000), Some(5000), None));

        assert!(serde_json::from_value::<PropertyFilter>(serde_json::json!({"year": "abc"})).is_err());
    }

    #[test]
    fn escape_like_quotes_wildcards() {
        assert_eq!(escape_like("50%_off"), "50!%!_off");
        assert_eq!(escape_like("wow!"), "wow!!");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn condition_pushes_price_and_year_down() {
        let f = PropertyFilter { min_price: Some(1000), max_price: Some(5000), year: Some(2020), name: None };
        let sql = property::Entity::find()
            .filter(f.condition(NameMatch::CaseSensitive))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains(r#""property"."price" >= 1000"#), "{sql}");
        assert!(sql.contains(r#""property"."price" <= 5000"#), "{sql}");
        assert!(sql.contains(r#""property"."year" = 2020"#), "{sql}");
        assert!(!sql.contains("LIKE"), "{sql}");
    }

    #[test]
    fn name_is_pushed_down_only_when_case_sensitive() {
        let f = PropertyFilter { name: Some("Villa".into()), ..Default::default() };
        let sensitive = property::Entity::find()
            .filter(f.condition(NameMatch::CaseSensitive))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sensitive.contains("LIKE '%Villa%'"), "{sensitive}");
        assert!(sensitive.contains("ESCAPE '!'"), "{sensitive}");

        let insensitive = property::Entity::find()
            .filter(f.condition(NameMatch::CaseInsensitive))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(!insensitive.contains("LIKE"), "{insensitive}");
    }
}
