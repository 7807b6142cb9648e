use super::*;

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn config_template_parses_as_valid_config() {
    let config: Config = toml::from_str(config_template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn no_config_flag_skips_loading() {
    let config = load_config(None, true).unwrap();
    assert_eq!(config, Config::default());
}
