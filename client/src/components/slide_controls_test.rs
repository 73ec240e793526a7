use super::*;

#[test]
fn dot_label_is_one_based() {
    assert_eq!(dot_label(0, "Title"), "Go to slide 1: Title");
    assert_eq!(dot_label(9, "Thank You"), "Go to slide 10: Thank You");
}

#[test]
fn dot_command_jumps_to_index() {
    assert_eq!(dot_command(3), DeckCommand::GoTo(3));
}

#[test]
fn dot_command_drives_deck_to_that_slide() {
    let mut deck = SlideDeck::new(5);
    assert_eq!(deck.apply(dot_command(4)), Some(4));
    assert_eq!(deck.current(), 4);
}
