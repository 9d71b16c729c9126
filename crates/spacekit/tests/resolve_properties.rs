//! Property tests for button style resolution.

use proptest::prelude::*;
use spacekit::button::{resolve, ButtonConfig, ConfigurationError, InteractionState, Size, Trigger};
use spacekit::palette::{green, indigo, Color};
use spacekit::style::Property;

fn size() -> impl Strategy<Value = Size> {
    prop::sample::select(Size::ALL.to_vec())
}

fn color() -> impl Strategy<Value = Option<Color>> {
    prop_oneof![
        Just(None),
        Just(Some(indigo::DARK)),
        Just(Some(green::BASE)),
        Just(Some(Color::from_static("#abcdef"))),
    ]
}

prop_compose! {
    fn config()(
        size in size(),
        flags in prop::array::uniform6(any::<bool>()),
        colors in prop::array::uniform6(color()),
        icon in prop::option::of(Just("ship".to_string())),
        children in prop::option::of("[A-Za-z]{1,8}"),
    ) -> ButtonConfig {
        let [disabled, fab, hidden, hover, active, focus] = flags;
        let [background, hover_background, disabled_background, disabled_text, hidden_active, hidden_focused] = colors;
        ButtonConfig {
            size,
            disabled,
            fab,
            hidden,
            force_hover_state: hover,
            force_active_state: active,
            force_focus_state: focus,
            background_color: background,
            hover_background_color: hover_background,
            disabled_background_color: disabled_background,
            disabled_text_color: disabled_text,
            hidden_active_background_color: hidden_active,
            hidden_focused_color: hidden_focused,
            icon,
            children,
        }
    }
}

fn is_rejected(config: &ButtonConfig) -> bool {
    (config.fab && (config.icon.is_none() || config.children.is_some()))
        || (config.force_active_state && config.force_hover_state)
}

proptest! {
    #[test]
    fn fab_without_icon_is_rejected(mut config in config()) {
        config.fab = true;
        config.icon = None;
        prop_assert_eq!(resolve(&config), Err(ConfigurationError::FabRequiresIcon));
    }

    #[test]
    fn fab_with_children_is_rejected(mut config in config(), text in "[a-z]{1,5}") {
        config.fab = true;
        config.icon = Some("ship".into());
        config.children = Some(text);
        prop_assert_eq!(resolve(&config), Err(ConfigurationError::FabForbidsChildren));
    }

    #[test]
    fn forced_active_and_hover_is_rejected(mut config in config()) {
        config.fab = false;
        config.force_active_state = true;
        config.force_hover_state = true;
        prop_assert_eq!(resolve(&config), Err(ConfigurationError::ConflictingForcedStates));
    }

    #[test]
    fn valid_configurations_always_resolve(config in config()) {
        prop_assume!(!is_rejected(&config));
        prop_assert!(resolve(&config).is_ok());
    }

    #[test]
    fn disabled_suppresses_every_overlay(mut config in config()) {
        config.disabled = true;
        prop_assume!(!is_rejected(&config));
        let style = resolve(&config).unwrap();

        prop_assert!(style.overlays.is_empty());
        prop_assert!(!style.resting.has(Property::Cursor));
        let disabled_text = config.disabled_text();
        let disabled_background = config.disabled_background();
        let color = style.resting.get(Property::Color).unwrap();
        prop_assert_eq!(color.value.as_str(), disabled_text.as_str());
        prop_assert!(color.important);
        if !config.hidden {
            prop_assert_eq!(
                style.resting.value(Property::BackgroundColor),
                Some(disabled_background.as_str())
            );
        }
    }

    #[test]
    fn enabled_buttons_carry_all_three_overlays(mut config in config()) {
        config.disabled = false;
        prop_assume!(!is_rejected(&config));
        let style = resolve(&config).unwrap();

        let states: Vec<InteractionState> = style.overlays.iter().map(|o| o.state).collect();
        prop_assert_eq!(states, InteractionState::MERGE_ORDER.to_vec());
        for overlay in &style.overlays {
            let forced = overlay.state.is_forced(&config);
            prop_assert_eq!(overlay.trigger == Trigger::Forced, forced);
        }
    }

    #[test]
    fn resolution_is_idempotent(config in config()) {
        prop_assert_eq!(resolve(&config), resolve(&config));
    }

    #[test]
    fn structural_sizing_matches_derived_values(config in config()) {
        prop_assume!(!is_rejected(&config));
        let style = resolve(&config).unwrap();
        let min_width = format!("{}px", config.min_width());
        prop_assert_eq!(style.structural.value(Property::MinWidth), Some(min_width.as_str()));
        prop_assert_eq!(style.metrics.icon_only, config.children.is_none());
        prop_assert_eq!(style.structural.value(Property::BorderWidth), Some("0"));
    }
}
