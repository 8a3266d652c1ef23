use crate::render::RenderSettings;

/// Formats the TOML sidecar written next to a rendered WAV.
pub fn format_manifest(name: &str, settings: &RenderSettings, samples: usize) -> String {
    let mut ret = String::new();
    ret.push_str("# RNGTV RENDER MANIFEST\n");
    ret.push_str("version = 0\n");
    ret.push_str(&format!("name = '{}'\n", name));

    let source = settings.source.name();
    let generator_seed = settings.generator_seed;
    let noise_seed = settings.noise_seed;
    let sample_rate = settings.sample_rate;
    let duration_ms = settings.duration.as_millis();
    let frequency = settings.frequency;

    ret.push_str(&format!(
        r#"
[render]
sample = "{name}.wav"
source = "{source}"
generator-seed = {generator_seed}
noise-seed = {noise_seed}
sample-rate = {sample_rate}
duration-ms = {duration_ms}
frequency = {frequency:?}
samples = {samples}
"#
    ));

    ret
}
