use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const COUNTRIES: [&str; 30] = [
    "Afghanistan", "Algeria", "Argentina", "Armenia", "Australia", "Austria",
    "Belgium", "Brazil", "Bulgaria", "Canada", "China", "Cuba", "Denmark",
    "Finland", "France", "Germany", "Hungary", "India", "Italy", "Japan",
    "Kenya", "Mexico", "Netherlands", "Norway", "Poland", "Romania",
    "South Korea", "Sweden", "United Kingdom", "United States",
];

/// Header names as they appear in the published table, padding included.
const HEADERS: [&str; 16] = [
    "countries",
    " summer_participations",
    " summer_gold",
    " summer_silver",
    " summer_bronze",
    " summer_total",
    " winter_participations",
    " winter_gold",
    " winter_silver",
    " winter_bronze",
    " winter_total",
    " total_participation",
    " total_gold",
    " total_silver",
    " total_bronze",
    " total_total",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    fn range(&mut self, lo: i64, hi: i64) -> i64 {
        lo + (self.next_f64() * (hi - lo + 1) as f64) as i64
    }
}

/// One season's medal counts: gold, silver, bronze.
fn medals(rng: &mut SimpleRng, participations: i64, strength: f64) -> [i64; 3] {
    let mut count = |share: f64| {
        let expected = participations as f64 * strength * share;
        (expected + rng.gauss(0.0, expected.sqrt().max(0.5))).round().max(0.0) as i64
    };
    [count(1.0), count(0.9), count(1.0)]
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // rows of HEADERS[1..]; None marks a cell left blank in the CSV
    let mut rows: Vec<(String, Vec<Option<i64>>)> = Vec::new();

    for (i, country) in COUNTRIES.iter().enumerate() {
        // log-normal team strength gives the heavy right tail of real medal tables
        let strength = (rng.gauss(-1.5, 1.3)).exp();
        let summer_part = rng.range(3, 28);
        let winter_part = rng.range(0, 22);

        let summer = medals(&mut rng, summer_part, strength);
        let winter = medals(&mut rng, winter_part, strength * 0.4);
        let summer_total: i64 = summer.iter().sum();
        let winter_total: i64 = winter.iter().sum();

        let mut values = vec![Some(summer_part)];
        values.extend(summer.iter().map(|v| Some(*v)));
        values.push(Some(summer_total));
        values.push(Some(winter_part));
        values.extend(winter.iter().map(|v| Some(*v)));
        values.push(Some(winter_total));
        values.push(Some(summer_part + winter_part));
        values.extend((0..3).map(|k| Some(summer[k] + winter[k])));
        values.push(Some(summer_total + winter_total));

        // a few blanks in the designated columns
        if i % 11 == 4 {
            values[4] = None; // summer_total
        }
        if i % 13 == 7 {
            values[14] = None; // total_total
        }
        rows.push((country.to_string(), values));
    }

    write_csv("data.csv", &rows)?;
    write_parquet("sample_data.parquet", &rows)?;

    println!("Wrote {} countries to data.csv and sample_data.parquet", rows.len());
    Ok(())
}

/// CSV with padded headers and some non-numeric junk in `summer_gold`.
fn write_csv(path: &str, rows: &[(String, Vec<Option<i64>>)]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record(HEADERS)?;
    for (i, (country, values)) in rows.iter().enumerate() {
        let mut record = vec![country.clone()];
        record.extend(values.iter().enumerate().map(|(col, v)| match v {
            Some(_) if col == 1 && i % 9 == 2 => "-".to_string(),
            Some(v) => v.to_string(),
            None => String::new(),
        }));
        writer.write_record(&record)?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &str, rows: &[(String, Vec<Option<i64>>)]) -> Result<()> {
    let mut fields = vec![Field::new("countries", DataType::Utf8, false)];
    let mut arrays: Vec<ArrayRef> = vec![Arc::new(StringArray::from(
        rows.iter().map(|(c, _)| c.as_str()).collect::<Vec<_>>(),
    ))];
    for (col, header) in HEADERS.iter().skip(1).enumerate() {
        fields.push(Field::new(header.trim(), DataType::Int64, true));
        arrays.push(Arc::new(Int64Array::from(
            rows.iter().map(|(_, v)| v[col]).collect::<Vec<_>>(),
        )));
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), arrays).context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}
