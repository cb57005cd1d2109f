use anyhow::Result;
use log::LevelFilter;

use redeem_math::config::CodecOptions;
use redeem_math::math::codec;
use redeem_math::math::functions::PlusWithScale;
use redeem_math::math::{DenseVector, Vector};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("REDEEM_MATH_LOG", "error,redeem_math=info"))
        .init();

    let mut weights = DenseVector::with_name("weights", 4);
    weights.bind_label("intercept", 0, 0.5)?;
    weights.bind_label("score", 2, -1.25)?;

    let gradient = DenseVector::from_vec(vec![0.1, 0.0, 0.4, 0.0]);
    weights.assign_from_with(&gradient, &PlusWithScale(-0.1))?;
    log::info!("updated weights: {}", weights);
    log::info!("|w|^2 = {}", weights.get_length_squared());
    log::info!("L1 = {}, L0 = {}", weights.norm(1.0)?, weights.norm(0.0)?);

    {
        let mut tail = weights.view_part(2, 2)?;
        tail.set(1, 2.0)?;
        log::info!("tail window sums to {}", tail.z_sum());
    }
    log::info!("after view write: {}", weights);

    let outer = weights.cross(&gradient);
    log::info!("outer product {:?}: {}", outer.shape(), outer);

    let text = codec::encode_with(&weights, &CodecOptions::new(true, true))?;
    println!("{}", text);
    let back = DenseVector::decode_vector(&text)?;
    log::info!(
        "round trip equal: {}, score = {}",
        back == weights,
        back.get_label("score")?
    );

    Ok(())
}
