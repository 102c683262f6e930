//! Rule engine scenario tests.
//!
//! These walk selections one die at a time, the way a player builds them,
//! and check which faces stay tappable after each step.

use yatzy_rules::core::{Category, Face};
use yatzy_rules::rules::{evaluate, Selection};
use yatzy_rules::Error;

fn dice(values: &[u8]) -> Vec<Face> {
    Face::from_values(values).unwrap()
}

fn admitted(category: Category, values: &[u8]) -> Vec<u8> {
    evaluate(category, &dice(values))
        .admitted()
        .iter()
        .map(Face::value)
        .collect()
}

// =============================================================================
// Dice Cap Tests
// =============================================================================

#[test]
fn test_max_dice_ignores_selection() {
    let selections: [&[u8]; 4] = [&[], &[1], &[6, 6], &[2, 2, 5, 5, 3]];
    for category in Category::ALL {
        for selection in selections {
            assert_eq!(
                evaluate(category, &dice(selection)).max_dice,
                category.max_dice()
            );
        }
    }
}

// =============================================================================
// Single-Number Categories
// =============================================================================

#[test]
fn test_upper_categories_admit_only_target() {
    let uppers = [
        (Category::Aces, 1),
        (Category::Twos, 2),
        (Category::Threes, 3),
        (Category::Fours, 4),
        (Category::Fives, 5),
        (Category::Sixes, 6),
    ];

    for (category, target) in uppers {
        let mut selection: Vec<u8> = Vec::new();
        for _ in 0..5 {
            assert_eq!(admitted(category, &selection), vec![target], "{}", category);
            selection.push(target);
        }
        assert!(admitted(category, &selection).is_empty(), "{}", category);
    }
}

// =============================================================================
// Chance
// =============================================================================

#[test]
fn test_chance_admits_everything_until_full() {
    let mut selection: Vec<u8> = Vec::new();
    for value in [6, 1, 6, 3] {
        selection.push(value);
        assert_eq!(admitted(Category::Chance, &selection), vec![1, 2, 3, 4, 5, 6]);
    }
    selection.push(2);
    assert!(admitted(Category::Chance, &selection).is_empty());
}

// =============================================================================
// Single-Group Categories
// =============================================================================

#[test]
fn test_pair() {
    assert_eq!(admitted(Category::Pair, &[]), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(admitted(Category::Pair, &[3]), vec![3]);
    assert!(admitted(Category::Pair, &[3, 3]).is_empty());
}

#[test]
fn test_three_of_a_kind() {
    let rules = evaluate(Category::ThreeOfAKind, &[]);
    assert_eq!(rules.max_dice, 3);
    assert!(rules.disabled.is_empty());

    assert_eq!(admitted(Category::ThreeOfAKind, &[5]), vec![5]);
    assert_eq!(admitted(Category::ThreeOfAKind, &[5, 5]), vec![5]);
    assert!(admitted(Category::ThreeOfAKind, &[5, 5, 5]).is_empty());
}

#[test]
fn test_four_of_a_kind() {
    assert_eq!(evaluate(Category::FourOfAKind, &[]).max_dice, 4);

    assert_eq!(admitted(Category::FourOfAKind, &[1]), vec![1]);
    assert_eq!(admitted(Category::FourOfAKind, &[1, 1, 1]), vec![1]);
    assert!(admitted(Category::FourOfAKind, &[1, 1, 1, 1]).is_empty());
}

// =============================================================================
// Two-Group Categories
// =============================================================================

#[test]
fn test_two_pairs_second_face_may_start() {
    assert_eq!(admitted(Category::TwoPairs, &[2, 2]), vec![1, 3, 4, 5, 6]);
}

#[test]
fn test_two_pairs_third_face_disabled() {
    let rules = evaluate(Category::TwoPairs, &dice(&[2, 2, 5]));
    assert!(rules.is_disabled(Face::SIX));
    assert!(rules.is_disabled(Face::TWO));
    assert!(rules.is_admitted(Face::FIVE));
}

#[test]
fn test_two_pairs_full() {
    assert!(admitted(Category::TwoPairs, &[2, 2, 5, 5]).is_empty());
}

#[test]
fn test_two_pairs_split_start() {
    // Two singles: both may still pair up, nothing new may start.
    assert_eq!(admitted(Category::TwoPairs, &[2, 5]), vec![2, 5]);
}

#[test]
fn test_full_house() {
    assert_eq!(admitted(Category::FullHouse, &[4, 4, 4]), vec![1, 2, 3, 5, 6]);
    assert_eq!(admitted(Category::FullHouse, &[4, 4, 4, 6]), vec![6]);
    assert!(admitted(Category::FullHouse, &[4, 4, 4, 6, 6]).is_empty());
}

#[test]
fn test_full_house_pair_first() {
    assert_eq!(admitted(Category::FullHouse, &[6, 6, 4, 4]), vec![4, 6]);
}

// =============================================================================
// Purity
// =============================================================================

#[test]
fn test_evaluate_is_idempotent() {
    let selection = dice(&[2, 2, 5]);
    for category in Category::ALL {
        assert_eq!(evaluate(category, &selection), evaluate(category, &selection));
    }
}

#[test]
fn test_evaluate_does_not_mutate_input() {
    let selection = dice(&[4, 4, 4]);
    let copy = selection.clone();
    let _ = evaluate(Category::FullHouse, &selection);
    assert_eq!(selection, copy);
}

#[test]
fn test_order_irrelevant() {
    for category in Category::ALL {
        assert_eq!(
            evaluate(category, &dice(&[5, 2, 2])),
            evaluate(category, &dice(&[2, 5, 2]))
        );
    }
}

// =============================================================================
// Selection Builder
// =============================================================================

#[test]
fn test_selection_builds_full_house() {
    let mut selection = Selection::new(Category::FullHouse);
    for face in dice(&[4, 6, 4, 6, 4]) {
        selection.add(face).unwrap();
    }
    assert!(selection.is_complete());
    assert_eq!(selection.sum(), 24);
    assert_eq!(selection.rules().admitted().len(), 0);
}

#[test]
fn test_selection_refuses_third_group() {
    let mut selection = Selection::new(Category::TwoPairs);
    selection.add(Face::TWO).unwrap();
    selection.add(Face::FIVE).unwrap();

    match selection.add(Face::SIX) {
        Err(Error::FaceNotAdmitted { face, category }) => {
            assert_eq!(face, Face::SIX);
            assert_eq!(category, Category::TwoPairs);
        }
        other => panic!("expected refusal, got {:?}", other),
    }
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_selection_remove_unlocks_group() {
    let mut selection = Selection::new(Category::Pair);
    selection.add(Face::THREE).unwrap();
    assert!(selection.add(Face::FOUR).is_err());

    selection.remove(Face::THREE);
    selection.add(Face::FOUR).unwrap();
    assert_eq!(selection.faces(), &[Face::FOUR]);
}

#[test]
fn test_category_from_text() {
    let category: Category = "threeOfAKind".parse().unwrap();
    assert_eq!(evaluate(category, &[]).max_dice, 3);

    assert!(matches!(
        "smallStraight".parse::<Category>(),
        Err(Error::UnknownCategory(_))
    ));
}
