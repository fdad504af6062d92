#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::missing_docs_in_private_items)]

//! Measures how chain lengths grow with the load factor and how much one resize helps, then
//! plots the results.

use chaintable::{HashTable, logger};
use log::info;
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

// Bucket count of every table measured
const TABLE_CAPACITY: usize = 1 << 12;
// Load factors from 0.25 to 4.0
const NUM_LOAD_FACTORS: usize = 16;
const MIN_LOAD_FACTOR: f64 = 0.25;
const MAX_LOAD_FACTOR: f64 = 4.0;
// Random keys are alphanumeric strings of this length
const KEY_LENGTH: usize = 12;

const AVERAGE_PLOT: &str = "average_chain_length.png";
const WORST_PLOT: &str = "longest_chain.png";

/// Chain statistics of one table
#[derive(Debug, Clone, Copy)]
struct ChainStats {
    /// Mean length over non-empty buckets
    average: f64,
    /// Length of the longest chain
    longest: usize,
}

impl ChainStats {
    fn of(table: &HashTable) -> Self {
        let (occupied, entries) = table
            .chain_lengths()
            .filter(|&len| len > 0)
            .fold((0usize, 0usize), |(occupied, entries), len| (occupied + 1, entries + len));
        let average = if occupied == 0 { 0.0 } else { entries as f64 / occupied as f64 };
        Self { average, longest: table.longest_chain() }
    }
}

fn random_key(rng: &mut impl Rng) -> String {
    rng.sample_iter(Alphanumeric).take(KEY_LENGTH).map(char::from).collect()
}

fn plot(
    path: &str,
    caption: &str,
    y_desc: &str,
    load_factors: &[f64],
    series: &[(&str, Vec<f64>)],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
    ];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series
        .iter()
        .flat_map(|(_, values)| values.iter())
        .fold(0.0, |max: f64, &x| max.max(x)) *
        1.1; // Add 10% margin

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..MAX_LOAD_FACTOR * 1.05, 0.0..max_y.max(1.0))?;

    chart
        .configure_mesh()
        .x_desc("Load factor before resize (entries / buckets)")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (idx, (name, values)) in series.iter().enumerate() {
        let color = &colors[idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(2);

        chart
            .draw_series(LineSeries::new(
                load_factors.iter().copied().zip(values.iter().copied()),
                line_style,
            ))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            load_factors
                .iter()
                .zip(values)
                .map(|(&x, &y)| Circle::new((x, y), 4, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_logger();

    let load_factors: Vec<f64> = (0..NUM_LOAD_FACTORS)
        .map(|i| {
            MIN_LOAD_FACTOR +
                (MAX_LOAD_FACTOR - MIN_LOAD_FACTOR) * (i as f64) / ((NUM_LOAD_FACTORS - 1) as f64)
        })
        .collect();

    let mut rng = rand::rng();
    let mut average_before = Vec::with_capacity(NUM_LOAD_FACTORS);
    let mut average_after = Vec::with_capacity(NUM_LOAD_FACTORS);
    let mut longest_before = Vec::with_capacity(NUM_LOAD_FACTORS);
    let mut longest_after = Vec::with_capacity(NUM_LOAD_FACTORS);

    for &load_factor in &load_factors {
        let num_keys = (TABLE_CAPACITY as f64 * load_factor) as usize;
        let mut table = HashTable::new(TABLE_CAPACITY)?;
        for _ in 0..num_keys {
            table.insert(random_key(&mut rng), "");
        }

        let before = ChainStats::of(&table);
        let table = table.resize();
        let after = ChainStats::of(&table);

        info!(
            "load factor {load_factor:.2}: {} entries, average chain {:.2} -> {:.2}, longest {} -> {}",
            table.len(),
            before.average,
            after.average,
            before.longest,
            after.longest
        );

        average_before.push(before.average);
        average_after.push(after.average);
        longest_before.push(before.longest as f64);
        longest_after.push(after.longest as f64);
    }

    plot(
        AVERAGE_PLOT,
        "Average Chain Length of Occupied Buckets",
        "Average chain length",
        &load_factors,
        &[("Before resize", average_before), ("After resize", average_after)],
    )?;
    plot(
        WORST_PLOT,
        "Longest Chain",
        "Longest chain length",
        &load_factors,
        &[("Before resize", longest_before), ("After resize", longest_after)],
    )?;

    println!("Generated plot images: {AVERAGE_PLOT}, {WORST_PLOT}");

    Ok(())
}
