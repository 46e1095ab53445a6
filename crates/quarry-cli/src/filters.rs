//! Turns `quarry query` arguments into a specification tree.

use anyhow::{Context, Result};
use quarry::prelude::*;
use quarry::spec::Id;
use rust_decimal::Decimal;

use crate::cli::QueryArgs;

/// Builds one clause per filter argument, in argument order.
pub fn clauses(args: &QueryArgs) -> Result<Vec<BoxedSpecification<Entity>>> {
    let mut clauses: Vec<BoxedSpecification<Entity>> = Vec::new();

    if args.active {
        clauses.push(Active.boxed());
    }
    if args.inactive {
        clauses.push(Inactive.boxed());
    }

    if let Some(id) = args.id {
        clauses.push(IdEquals::new(id).boxed());
    }
    if args.id_min.is_some() || args.id_max.is_some() {
        let min = args.id_min.unwrap_or(0);
        let max = args.id_max.unwrap_or(Id::MAX);
        clauses.push(IdRange::new(min, max).boxed());
    }
    if !args.ids.is_empty() {
        clauses.push(IdIn::new(args.ids.iter().copied()).boxed());
    }

    if let Some(name) = &args.name {
        clauses.push(NameEquals::new(name.as_str()).boxed());
    }
    if let Some(name) = &args.name_ignore_case {
        clauses.push(NameEqualsIgnoreCase::new(name.as_str()).boxed());
    }
    if let Some(needle) = &args.name_contains {
        clauses.push(NameContains::new(needle.as_str()).boxed());
    }
    if let Some(prefix) = &args.name_starts_with {
        clauses.push(NameStartsWith::new(prefix.as_str()).boxed());
    }
    if let Some(suffix) = &args.name_ends_with {
        clauses.push(NameEndsWith::new(suffix.as_str()).boxed());
    }
    if let Some(pattern) = &args.name_regex {
        let spec = NameMatchesRegex::new(pattern.as_str())
            .with_context(|| format!("invalid --name-regex {:?}", pattern))?;
        clauses.push(spec.boxed());
    }
    if args.name_len_min.is_some() || args.name_len_max.is_some() {
        let min = args.name_len_min.unwrap_or(0);
        let max = args.name_len_max.unwrap_or(usize::MAX);
        clauses.push(NameLengthBetween::new(min, max).boxed());
    }

    if let Some(bound) = args.price_gt {
        clauses.push(PriceGreaterThan::new(bound).boxed());
    }
    if let Some(bound) = args.price_lt {
        clauses.push(PriceLessThan::new(bound).boxed());
    }
    if args.price_min.is_some() || args.price_max.is_some() {
        let min = args.price_min.unwrap_or(Decimal::MIN);
        let max = args.price_max.unwrap_or(Decimal::MAX);
        clauses.push(PriceBetween::new(min, max).boxed());
    }

    if let Some(instant) = args.created_before {
        clauses.push(CreatedBefore::new(instant).boxed());
    }
    if let Some(instant) = args.created_after {
        clauses.push(CreatedAfter::new(instant).boxed());
    }

    Ok(clauses)
}

/// Combines the clauses with ALL OF (or ANY OF), then applies `--negate`.
pub fn build(args: &QueryArgs) -> Result<BoxedSpecification<Entity>> {
    let clauses = clauses(args)?;
    let combined = if args.any {
        AnyOf::from(clauses).boxed()
    } else {
        AllOf::from(clauses).boxed()
    };
    Ok(if args.negate {
        combined.not().boxed()
    } else {
        combined
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: Id, active: bool, price: i64) -> Entity {
        Entity::builder()
            .id(id)
            .name(format!("Entity {}", id))
            .active(active)
            .price(price)
            .build()
    }

    #[test]
    fn no_filters_is_vacuous() {
        let all = build(&QueryArgs::default()).unwrap();
        assert!(all.is_satisfied_by(&entity(1, false, 0)));

        let any = build(&QueryArgs {
            any: true,
            ..Default::default()
        })
        .unwrap();
        assert!(!any.is_satisfied_by(&entity(1, false, 0)));
    }

    #[test]
    fn clauses_follow_argument_order() {
        let args = QueryArgs {
            active: true,
            id_min: Some(3),
            id_max: Some(9),
            name_regex: Some("Entity [0-9]".to_string()),
            price_min: Some(Decimal::from(100)),
            price_max: Some(Decimal::from(200)),
            ..Default::default()
        };
        let spec = build(&args).unwrap();
        assert_eq!(
            Specification::<Entity>::describe(&spec),
            "ALL OF [active, id in [3, 9], name matches /Entity [0-9]/, price in [100, 200]]"
        );
    }

    #[test]
    fn negated_any() {
        let args = QueryArgs {
            active: true,
            price_gt: Some(Decimal::from(400)),
            any: true,
            negate: true,
            ..Default::default()
        };
        let spec = build(&args).unwrap();
        assert_eq!(Specification::<Entity>::describe(&spec), "NOT ANY OF [active, price > 400]");
        assert!(spec.is_satisfied_by(&entity(3, false, 100)));
        assert!(!spec.is_satisfied_by(&entity(4, true, 100)));
        assert!(!spec.is_satisfied_by(&entity(5, false, 455)));
    }

    #[test]
    fn invalid_regex_has_context() {
        let args = QueryArgs {
            name_regex: Some("(".to_string()),
            ..Default::default()
        };
        let Err(err) = build(&args) else {
            panic!("expected an invalid regex error");
        };
        assert!(err.to_string().contains("--name-regex"));
        assert!(format!("{:#}", err).contains("invalid regex pattern"));
    }

    #[test]
    fn one_sided_ranges() {
        let args = QueryArgs {
            name_len_max: Some(8),
            ..Default::default()
        };
        let spec = build(&args).unwrap();
        assert!(spec.is_satisfied_by(&entity(9, true, 0)));
        assert!(!spec.is_satisfied_by(&entity(10, true, 0)));
    }
}
