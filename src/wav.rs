use std::io::Cursor;

use anyhow::{anyhow, Result};
use hound::{WavSpec, WavWriter};

/// Peak level rendered buffers are scaled down to when they exceed it
pub const HEADROOM: f32 = 0.8;

/// Encodes a mono buffer as 32-bit float WAV bytes.
///
/// Buffers peaking above [`HEADROOM`] are scaled down to it; quieter buffers
/// are written untouched.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>> {
    let peak = samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
    let normalize_factor = if peak > HEADROOM { HEADROOM / peak } else { 1.0 };

    let wav_spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut wav = vec![];
    let mut cursor = Cursor::new(&mut wav);

    let mut wav_writer = WavWriter::new(&mut cursor, wav_spec)
        .map_err(|e| anyhow!("Failed to start WAV stream: {}", e))?;

    for sample in samples {
        wav_writer
            .write_sample(sample * normalize_factor)
            .map_err(|e| anyhow!("Failed to write WAV sample: {}", e))?;
    }

    wav_writer
        .finalize()
        .map_err(|e| anyhow!("Failed to finalize WAV stream: {}", e))?;

    Ok(wav)
}
