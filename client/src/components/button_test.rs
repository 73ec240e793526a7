use super::*;

#[test]
fn default_button_class() {
    assert_eq!(
        button_class(ButtonVariant::default(), ButtonSize::default(), ""),
        "btn btn--default btn--md"
    );
}

#[test]
fn variant_size_and_extra_compose() {
    assert_eq!(
        button_class(ButtonVariant::Secondary, ButtonSize::Lg, " hero__cta "),
        "btn btn--secondary btn--lg hero__cta"
    );
    assert_eq!(button_class(ButtonVariant::Ghost, ButtonSize::Sm, ""), "btn btn--ghost btn--sm");
}
