#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    use crate::budgets::{evaluate, Period};
    use crate::categories::Category;
    use crate::expenses::Expense;
    use crate::reports::assemble;
    use crate::users::User;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            email: "owner@example.com".to_string(),
            password_hash: "x".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

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

    fn expense(category_id: &str, amount: rust_decimal::Decimal, day: u32) -> Expense {
        Expense {
            id: format!("e-{category_id}-{day}"),
            user_id: "u1".to_string(),
            category_id: category_id.to_string(),
            amount,
            note: "lunch".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2025, 8, day).unwrap(),
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn rows_sorted_most_at_risk_first_with_undefined_last() {
        let period: Period = "2025-08".parse().unwrap();
        let categories = vec![
            category("c1", "Food", dec!(100)),
            category("c2", "Rent", dec!(100)),
            category("c3", "Misc", dec!(0)),
        ];
        let expenses = vec![
            expense("c1", dec!(30), 1),
            expense("c2", dec!(90), 2),
            expense("c3", dec!(5), 3),
        ];
        let snapshot = evaluate(&period, &categories, &expenses);
        let report = assemble(&user(), &snapshot, &[]);

        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Misc"]);
        assert_eq!(report.rows[2].percent_used, None);
    }

    #[test]
    fn ties_break_by_name_ascending() {
        let period: Period = "2025-08".parse().unwrap();
        let categories = vec![
            category("c1", "Zoo", dec!(100)),
            category("c2", "Art", dec!(200)),
        ];
        let expenses = vec![expense("c1", dec!(50), 1), expense("c2", dec!(100), 2)];
        let snapshot = evaluate(&period, &categories, &expenses);
        let report = assemble(&user(), &snapshot, &[]);

        // Both at 50.00% used
        let names: Vec<&str> = report.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Art", "Zoo"]);
    }

    #[test]
    fn values_are_copied_from_the_snapshot_verbatim() {
        let period: Period = "2025-08".parse().unwrap();
        let categories = vec![category("c1", "Food", dec!(300))];
        let expenses = vec![expense("c1", dec!(100), 4)];
        let snapshot = evaluate(&period, &categories, &expenses);
        let report = assemble(&user(), &snapshot, &[]);

        let usage = &snapshot.categories[0];
        let row = &report.rows[0];
        assert_eq!(row.percent_used, usage.percent_used);
        assert_eq!(row.budget, usage.budget);
        assert_eq!(row.spent, usage.spent);
        assert_eq!(report.total.budget, snapshot.total.budget);
        assert_eq!(report.total.spent, snapshot.total.spent);
        assert_eq!(report.total.percent_used, snapshot.total.percent_used);
    }

    #[test]
    fn recent_expenses_carry_category_names() {
        let period: Period = "2025-08".parse().unwrap();
        let categories = vec![category("c1", "Food", dec!(100))];
        let recent = vec![expense("c1", dec!(12), 5), expense("ghost", dec!(3), 6)];
        let snapshot = evaluate(&period, &categories, &[]);
        let report = assemble(&user(), &snapshot, &recent);

        assert_eq!(report.recent_expenses.len(), 2);
        assert_eq!(report.recent_expenses[0].category_name, "Food");
        assert_eq!(report.recent_expenses[1].category_name, "Uncategorized");
        assert_eq!(report.owner_email, "owner@example.com");
        assert_eq!(report.period, "2025-08");
    }
}
