use super::*;

#[test]
fn parses_exact_color_names_only() {
    assert_eq!("blue".parse::<Color>(), Ok(Color::Blue));
    assert_eq!("yellow".parse::<Color>(), Ok(Color::Yellow));
    assert!("Blue".parse::<Color>().is_err());
    assert!(" red".parse::<Color>().is_err());
    assert_eq!(
        "purple".parse::<Color>(),
        Err(ParseColorError::new("purple"))
    );
}

#[test]
fn color_names_follow_button_order() {
    let names: Vec<_> = Color::ALL.iter().map(|color| color.name()).collect();
    assert_eq!(names, ["yellow", "green", "red", "blue"]);
    assert_eq!(Color::Red.to_string(), "red");
}

#[test]
fn scripted_colors_wrap_around() {
    let mut source = ScriptedColors::new([Color::Red, Color::Blue]);
    assert_eq!(source.next_color(), Color::Red);
    assert_eq!(source.next_color(), Color::Blue);
    assert_eq!(source.next_color(), Color::Red);

    let mut empty = ScriptedColors::new([]);
    assert_eq!(empty.next_color(), Color::Yellow);
}

#[test]
fn seeded_random_colors_are_reproducible() {
    let mut a = RandomColors::seeded(7);
    let mut b = RandomColors::seeded(7);
    let left: Vec<_> = (0..16).map(|_| a.next_color()).collect();
    let right: Vec<_> = (0..16).map(|_| b.next_color()).collect();
    assert_eq!(left, right);
}

#[test]
fn sequence_score_excludes_the_starting_color() {
    let mut sequence = Sequence::starting_with(Color::Green);
    assert_eq!(sequence.score(), 0);
    sequence.push(Color::Yellow);
    assert_eq!(sequence.len(), 2);
    assert_eq!(sequence.score(), 1);
    assert_eq!(sequence.get(1), Some(Color::Yellow));
    assert_eq!(sequence.get(2), None);
}

#[test]
fn colors_serialize_as_lowercase_words() {
    let json = serde_json::to_string(&Color::Green).expect("serialize");
    assert_eq!(json, "\"green\"");
}
