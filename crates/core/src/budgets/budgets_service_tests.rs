#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    use crate::budgets::{evaluate, round_percent, Period};
    use crate::categories::Category;
    use crate::expenses::Expense;

    fn category(id: &str, name: &str, budget: rust_decimal::Decimal) -> Category {
        let now = Utc::now().naive_utc();
        Category {
            id: id.to_string(),
            user_id: "u1".to_string(),
            name: name.to_string(),
            budget_amount: budget,
            created_at: now,
            updated_at: now,
        }
    }

    fn expense(category_id: &str, amount: rust_decimal::Decimal) -> Expense {
        Expense {
            id: format!("e-{category_id}-{amount}"),
            user_id: "u1".to_string(),
            category_id: category_id.to_string(),
            amount,
            note: String::new(),
            entry_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn period() -> Period {
        "2025-08".parse().unwrap()
    }

    #[test]
    fn percent_used_is_exact_to_two_decimals() {
        let categories = vec![category("c1", "Food", dec!(300))];
        let expenses = vec![expense("c1", dec!(100))];
        let snapshot = evaluate(&period(), &categories, &expenses);
        // 100 / 300 * 100 = 33.333... -> 33.33
        assert_eq!(snapshot.categories[0].percent_used, Some(dec!(33.33)));
    }

    #[test]
    fn zero_budget_has_undefined_percentage() {
        let categories = vec![category("c1", "Misc", dec!(0))];
        let expenses = vec![expense("c1", dec!(42))];
        let snapshot = evaluate(&period(), &categories, &expenses);
        assert_eq!(snapshot.categories[0].percent_used, None);
        assert_eq!(snapshot.categories[0].spent, dec!(42));
        // Spend in a zero-budget category still counts toward the total
        assert_eq!(snapshot.total.spent, dec!(42));
        assert_eq!(snapshot.total.percent_used, None);
    }

    #[test]
    fn totals_aggregate_across_categories() {
        let categories = vec![
            category("c1", "Rent", dec!(100)),
            category("c2", "Food", dec!(50)),
        ];
        let expenses = vec![expense("c1", dec!(90)), expense("c2", dec!(10))];
        let snapshot = evaluate(&period(), &categories, &expenses);
        assert_eq!(snapshot.total.budget, dec!(150));
        assert_eq!(snapshot.total.spent, dec!(100));
        assert_eq!(snapshot.total.percent_used, Some(dec!(66.67)));
    }

    #[test]
    fn overspend_is_reported_above_100() {
        let categories = vec![category("c1", "Food", dec!(50))];
        let expenses = vec![expense("c1", dec!(75))];
        let snapshot = evaluate(&period(), &categories, &expenses);
        assert_eq!(snapshot.categories[0].percent_used, Some(dec!(150.00)));
        assert_eq!(snapshot.categories[0].remaining_amount(), dec!(-25));
        assert_eq!(snapshot.categories[0].remaining_percent(), Some(dec!(-50.00)));
    }

    #[test]
    fn category_without_expenses_is_zero_spent() {
        let categories = vec![category("c1", "Rent", dec!(100))];
        let snapshot = evaluate(&period(), &categories, &[]);
        assert_eq!(snapshot.categories[0].spent, dec!(0));
        assert_eq!(snapshot.categories[0].percent_used, Some(dec!(0.00)));
    }

    #[test]
    fn no_categories_yields_empty_snapshot() {
        let snapshot = evaluate(&period(), &[], &[]);
        assert!(snapshot.categories.is_empty());
        assert_eq!(snapshot.total.budget, dec!(0));
        assert_eq!(snapshot.total.percent_used, None);
    }

    #[test]
    fn rounding_is_midpoint_away_from_zero() {
        assert_eq!(round_percent(dec!(12.345)), dec!(12.35));
        assert_eq!(round_percent(dec!(12.344)), dec!(12.34));
    }

    #[test]
    fn period_parsing_and_bounds() {
        let period: Period = "2025-12".parse().unwrap();
        assert_eq!(period.to_string(), "2025-12");
        assert_eq!(period.start(), NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(
            period.end_exclusive(),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
        assert!(period.contains(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));

        assert!("2025-13".parse::<Period>().is_err());
        assert!("not-a-period".parse::<Period>().is_err());
    }
}
