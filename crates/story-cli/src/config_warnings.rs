use story_config::SetupConfig;

/// Emit warnings for settings that will make every request fail.
pub fn warn_unconfigured(config: &SetupConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SetupConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.nocodb.has_token() {
        warnings.push(
            "NOCODB_API_TOKEN is not set; NocoDB will reject every table request.".to_string(),
        );

        let misnamed = env_keys.iter().any(|key| {
            key.starts_with("STORYCEPTION_NOCODB") && !key.starts_with("STORYCEPTION_NOCODB__")
        });
        if misnamed {
            warnings.push(
                "STORYCEPTION_NOCODB* env vars exist but were not applied. \
                 Use double underscores (example: STORYCEPTION_NOCODB__API_TOKEN)."
                    .to_string(),
            );
        }
    }

    warnings
}
