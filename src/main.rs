use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = escape_time::RenderConfig::mandelbrot()?;
    let colours = escape_time::render(&config)?;

    let interior = colours.iter().filter(|&&value| value == 0.0).count();

    println!("Mode:           {}", config.mode.display_name());
    println!("Grid size:      {}x{}", colours.rows(), colours.cols());
    println!("Max iterations: {}", config.max_iterations);
    println!("Colour law:     {}", config.colour_law);
    println!("Interior cells: {}", interior);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_returns_ok() {
        let result = main();

        assert!(result.is_ok());
    }
}
