use super::*;
use crate::data::case_studies;

#[test]
fn deck_opens_with_title_and_closes_with_thank_you() {
    let slides = deck_slides();
    assert_eq!(slides.first(), Some(&SlideKind::Title));
    assert_eq!(slides.last(), Some(&SlideKind::ThankYou));
    assert_eq!(slides[1], SlideKind::About);
    assert_eq!(slides[2], SlideKind::PortfolioDivider);
    assert_eq!(slides[slides.len() - 2], SlideKind::Capabilities);
}

#[test]
fn every_case_gets_intro_then_detail() {
    let slides = deck_slides();
    assert_eq!(slides.len(), 5 + CASE_STUDIES.len() * 2);
    assert_eq!(slides.len(), 13);

    for (i, case) in CASE_STUDIES.iter().enumerate() {
        assert_eq!(slides[3 + i * 2], SlideKind::CaseIntro(case));
        assert_eq!(slides[4 + i * 2], SlideKind::CaseDetail(case));
    }
}

#[test]
fn unfeatured_cases_still_get_slides() {
    let slides = deck_slides();
    let maccabee = case_studies::find("maccabee");
    assert!(maccabee.is_some_and(|case| !case.featured));
    assert!(slides.iter().any(|slide| Some(*slide) == maccabee.map(SlideKind::CaseIntro)));
    assert!(slides.iter().any(|slide| Some(*slide) == maccabee.map(SlideKind::CaseDetail)));
}

#[test]
fn slide_titles_are_unique() {
    let titles = deck_slides().into_iter().map(SlideKind::title).collect::<Vec<_>>();
    let mut deduped = titles.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), titles.len());
}

#[test]
fn case_slide_titles_name_the_case() {
    let spotify = case_studies::find("spotify").map(|case| (SlideKind::CaseIntro(case), SlideKind::CaseDetail(case)));
    let Some((intro, detail)) = spotify else {
        panic!("spotify case study missing");
    };
    assert_eq!(intro.title(), "Spotify");
    assert_eq!(detail.title(), "Spotify Details");
}

#[test]
fn deck_state_spans_every_slide() {
    let slides = deck_slides();
    let mut deck = SlideDeck::new(slides.len());
    assert_eq!(deck.apply(DeckCommand::Last), Some(slides.len() - 1));
    assert_eq!(deck.counter_label(), format!("{} / {}", slides.len(), slides.len()));
}
