use mind_config::ENV_PREFIX;

/// Config sections and one field each, used to spot env keys that missed the `__` separator.
const SECTIONS: &[(&str, &str)] = &[
    ("STORE", "LOG_PATH"),
    ("GENERAL", "DEFAULT_LIMIT"),
    ("CARE", "BREATHING_CYCLES"),
];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_mistyped_env() {
    for warning in collect_mistyped_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_mistyped_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    SECTIONS
        .iter()
        .filter_map(|(section, example_field)| {
            let single = format!("{ENV_PREFIX}{section}_");
            let double = format!("{ENV_PREFIX}{section}__");
            let mistyped = env_keys
                .iter()
                .any(|key| key.starts_with(&single) && !key.starts_with(&double));
            mistyped.then(|| {
                format!(
                    "{single}* env vars are ignored. Use double underscores (example: {double}{example_field})."
                )
            })
        })
        .collect()
}
