//! End-to-end tests for the plan builder.
//!
//! Drafts are expressed as the camelCase JSON the external generator
//! actually returns, then driven through the full pipeline.

use galley_core::{build_provision_plan, DraftPlan, PlanError, TripParameters};

fn params(budget: f64) -> TripParameters {
    serde_json::from_value(serde_json::json!({
        "duration": { "count": 1, "unit": "week" },
        "headcount": 4,
        "adults": 2,
        "children": [
            { "ageRange": "8-12", "count": 2, "dietaryNotes": "no shellfish" }
        ],
        "dietaryPreferences": [
            { "preference": "Gluten-free", "guests": 1 }
        ],
        "mealTypes": [
            { "mealType": "Breakfast", "perDay": 1 },
            { "mealType": "Lunch", "perDay": 0 },
            { "mealType": "Dinner", "perDay": 1 }
        ],
        "budget": budget
    }))
    .expect("params fixture is valid")
}

fn draft() -> DraftPlan {
    serde_json::from_value(serde_json::json!({
        "provisionsList": [
            {
                "category": "Drinking Water",
                "items": [
                    { "name": "Bottled Water", "quantity": "24 bottles", "estimatedPrice": 1.0 }
                ]
            },
            {
                "category": "Beverages",
                "items": [
                    { "name": "Sparkling Water", "quantity": "6 bottles", "estimatedPrice": 1.5 },
                    { "name": "Orange Juice", "quantity": "4 L", "estimatedPrice": 3.0 },
                    { "name": "Ground Coffee", "quantity": "500 g", "estimatedPrice": 12.0 }
                ]
            },
            {
                "category": "Fresh Fruits",
                "items": [
                    { "name": "Bananas", "quantity": "2 kg", "estimatedPrice": 2.0 },
                    { "name": "Apples", "quantity": "1.5 kg", "estimatedPrice": 3.0 }
                ]
            },
            {
                "category": "Snacks",
                "items": [
                    { "name": "Potato Chips", "quantity": "3 bags", "estimatedPrice": 4.0 }
                ]
            },
            {
                "category": "Snack Options",
                "items": [
                    { "name": "Trail Mix", "quantity": "2 packs", "estimatedPrice": 6.0 }
                ]
            }
        ],
        "mealSuggestions": [
            {
                "day": "Day 1",
                "meals": [
                    { "type": "Breakfast", "suggestion": "Greek yogurt with honey and granola" },
                    { "type": "Lunch", "suggestion": "Club sandwiches" },
                    { "type": "Dinner", "suggestion": "Grilled sea bass with Greek salad" }
                ]
            },
            {
                "day": "Day 2",
                "meals": [
                    { "type": "Breakfast", "suggestion": "Pancakes with maple syrup" },
                    { "type": "Dinner", "suggestion": "Pasta with tomato sauce" }
                ]
            }
        ]
    }))
    .expect("draft fixture is valid")
}

#[test]
fn full_plan_for_a_week_charter() {
    let plan = build_provision_plan(&params(1000.0), draft()).unwrap();

    // Water leads the list with recomputed quantities; the draft's own water
    // category and the sparkling water item are gone.
    assert_eq!(plan.provisions_list[0].category, "Mineral Water");
    assert_eq!(plan.provisions_list[1].category, "Still Water");
    assert_eq!(plan.provisions_list[0].items[0].quantity, "68 bottles");
    assert_eq!(plan.provisions_list[1].items[0].quantity, "101 bottles");
    let beverages = &plan.provisions_list[2];
    assert_eq!(beverages.category, "Beverages");
    assert_eq!(beverages.items.len(), 2);

    // Raw water cost exceeds the sub-split ceilings, so both clamp.
    assert_eq!(plan.category_totals["Mineral Water"], 40.0);
    assert_eq!(plan.category_totals["Still Water"], 60.0);

    // Beverages: 4 L x 3.0 + 0.5 kg x 12.0. Fruits: 2 x 2.0 + 1.5 x 3.0.
    assert_eq!(plan.category_totals["Beverages"], 18.0);
    assert_eq!(plan.category_totals["Fresh Fruits"], 8.5);

    // Both snack categories merged, items concatenated.
    assert_eq!(plan.category_totals["Snacks"], 24.0);
    let snacks = plan
        .provisions_list
        .iter()
        .find(|c| c.category == "Snacks")
        .unwrap();
    assert_eq!(snacks.items.len(), 2);

    assert_eq!(plan.total_cost, 150.5);
    assert_eq!(plan.remaining_budget, 849.5);

    // Two draft days stretch to seven: day one once, day two repeated.
    assert_eq!(plan.meal_suggestions.len(), 7);
    assert_eq!(plan.meal_suggestions[0].day, "Day 1");
    assert_eq!(plan.meal_suggestions[6].day, "Day 7");
    assert_eq!(plan.meal_suggestions[0].meals.len(), 2); // lunch is inactive
    assert_eq!(
        plan.meal_suggestions[3].meals[0].suggestion,
        "Pancakes with maple syrup"
    );

    // Meal text mentions salad, pancakes, and honey; the matching pantry
    // staples get backfilled into their classified categories.
    let item_names: Vec<&str> = plan
        .provisions_list
        .iter()
        .flat_map(|c| c.items.iter())
        .map(|i| i.name.as_str())
        .collect();
    assert!(item_names.contains(&"Organic Salad Greens Mix"));
    assert!(item_names.contains(&"Gluten-Free Flour Mix"));
    assert!(item_names.contains(&"Premium Preserves and Honey"));
    assert!(!item_names.contains(&"Gluten-Free Bread"));
    assert!(!item_names.contains(&"Mixed Premium Nuts"));
}

#[test]
fn over_budget_charter_gets_a_diagnostic() {
    let draft: DraftPlan = serde_json::from_value(serde_json::json!({
        "provisionsList": (1..=7).map(|i| serde_json::json!({
            "category": format!("Charter Extras {}", i),
            "items": [
                { "name": format!("Gear {}", i), "quantity": "1 piece", "estimatedPrice": 40.0 }
            ]
        })).collect::<Vec<_>>(),
        "mealSuggestions": []
    }))
    .unwrap();

    let err = build_provision_plan(&params(100.0), draft).unwrap_err();
    let PlanError::BudgetExceeded(diagnostic) = err else {
        panic!("expected a budget diagnostic");
    };

    // Seven unlisted categories clamp to 15 each; water adds its fixed 10.
    assert_eq!(diagnostic.total_cost, 115.0);
    assert_eq!(diagnostic.budget, 100.0);
    assert_eq!(diagnostic.overage, 15.0);
    assert_eq!(diagnostic.overage_percent, 15.0);
    assert_eq!(diagnostic.suggestions.len(), 4);
    for pair in diagnostic.categories.windows(2) {
        assert!(pair[0].cost >= pair[1].cost);
    }
}

#[test]
fn validation_failures_precede_reconciliation() {
    let mut bad = params(0.0);
    assert!(matches!(
        build_provision_plan(&bad, draft()),
        Err(PlanError::InvalidBudget)
    ));

    bad = params(1000.0);
    bad.meal_types.clear();
    assert!(matches!(
        build_provision_plan(&bad, draft()),
        Err(PlanError::NoActiveMealTypes)
    ));
}

#[test]
fn empty_draft_still_yields_a_covered_plan() {
    let plan = build_provision_plan(&params(1000.0), DraftPlan::default()).unwrap();

    // Water is all the provisions list holds, and every day is labeled.
    assert_eq!(plan.provisions_list.len(), 2);
    assert_eq!(plan.total_cost, 100.0);
    assert_eq!(plan.meal_suggestions.len(), 7);
    assert!(plan.meal_suggestions.iter().all(|d| d.meals.is_empty()));
}

#[test]
fn output_serializes_in_wire_convention() {
    let plan = build_provision_plan(&params(1000.0), draft()).unwrap();
    let value = serde_json::to_value(&plan).unwrap();

    assert!(value.get("provisionsList").is_some());
    assert!(value.get("mealSuggestions").is_some());
    assert!(value.get("totalCost").is_some());
    assert!(value.get("remainingBudget").is_some());
    assert!(value.get("categoryTotals").is_some());
    let first_item = &value["provisionsList"][0]["items"][0];
    assert!(first_item.get("estimatedPrice").is_some());
    let first_meal = &value["mealSuggestions"][0]["meals"][0];
    assert!(first_meal.get("type").is_some());
}
