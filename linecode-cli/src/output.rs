use std::io::Write;

use linecode::{
    Scheme,
    TimelinePoint,
};
use serde::Serialize;

use crate::{
    Error,
    args::OutputFormat,
};

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    scheme: Scheme,
    samples_per_bit: usize,
    points: &'a [TimelinePoint],
}

#[derive(Debug, Serialize)]
struct CsvRow {
    time: f64,
    volts: i8,
}

pub fn write_points<W: Write>(
    mut writer: W,
    format: OutputFormat,
    scheme: Scheme,
    points: &[TimelinePoint],
) -> Result<(), Error> {
    match format {
        OutputFormat::Table => {
            writeln!(writer, "{:>8}  {:>5}", "time", "volts")?;
            for point in points {
                writeln!(writer, "{:>8}  {:>5}", point.time, point.voltage)?;
            }
        }
        OutputFormat::Csv => {
            // header written by hand so that it's there even without rows
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(writer);
            writer.write_record(["time", "volts"])?;
            for point in points {
                writer.serialize(CsvRow {
                    time: point.time,
                    volts: point.voltage.volts(),
                })?;
            }
            writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(
                &mut writer,
                &JsonOutput {
                    scheme,
                    samples_per_bit: scheme.time_base().samples_per_bit(),
                    points,
                },
            )?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

pub fn write_schemes<W: Write>(mut writer: W) -> Result<(), Error> {
    for scheme in Scheme::ALL {
        let descriptor = scheme.descriptor();
        let levels = descriptor
            .levels
            .iter()
            .map(|level| level.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            writer,
            "{:<24} {:<34} {} sample(s)/bit  levels: {levels} V",
            descriptor.name,
            descriptor.full_name,
            descriptor.time_base.samples_per_bit(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use linecode::Scheme;

    use crate::{
        args::OutputFormat,
        output::{
            write_points,
            write_schemes,
        },
    };

    fn render(format: OutputFormat, scheme: Scheme, bits: &str) -> String {
        let timeline = linecode::encode(scheme, bits);
        let mut buf = vec![];
        write_points(&mut buf, format, scheme, timeline.points()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_has_a_header_and_one_row_per_point() {
        let output = render(OutputFormat::Csv, Scheme::Manchester, "10");
        assert_eq!(
            output,
            "time,volts\n0.0,0\n0.5,5\n1.0,5\n1.5,0\n2.0,0\n"
        );
    }

    #[test]
    fn json_carries_scheme_and_time_base() {
        let output = render(OutputFormat::Json, Scheme::Bipolar, "101");
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["scheme"], "Bipolar");
        assert_eq!(value["samples_per_bit"], 1);
        let points = value["points"].as_array().unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0]["time"], 1.0);
        assert_eq!(points[0]["voltage"], -5);
        assert_eq!(points[2]["voltage"], 5);
    }

    #[test]
    fn table_lists_times_and_volts() {
        let output = render(OutputFormat::Table, Scheme::NrzL, "1");
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), ["1", "5"]);
        assert_eq!(lines[2].split_whitespace().collect::<Vec<_>>(), ["2", "5"]);
    }

    #[test]
    fn empty_input_prints_only_the_header() {
        assert_eq!(render(OutputFormat::Csv, Scheme::NrzI, ""), "time,volts\n");
        assert_eq!(render(OutputFormat::Table, Scheme::NrzI, "").lines().count(), 1);
    }

    #[test]
    fn every_scheme_is_listed() {
        let mut buf = vec![];
        write_schemes(&mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        for scheme in Scheme::ALL {
            assert!(output.contains(scheme.name()), "{scheme} missing");
        }
    }
}
