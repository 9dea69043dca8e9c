// src/simulation/csv.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::math::HarmonicFit;
use crate::simulation::{Sample, SimulationError, TimeSeries};

/// 間引き間隔の検証
///
/// 出力ファイルを開く前、積分を始める前に呼ぶこと。
pub fn validate_skip(skip: usize) -> Result<(), SimulationError> {
    if skip == 0 {
        return Err(SimulationError::InvalidSkip);
    }
    Ok(())
}

/// CSV 出力の設定とヘッダーの書き込み
///
/// 親ディレクトリが存在しなければ作成する。
pub fn setup_csv_output(path: &Path) -> Result<BufWriter<File>, SimulationError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let output_file = File::create(path)?;
    let mut writer = BufWriter::new(output_file);
    write_csv_header(&mut writer)?;
    Ok(writer)
}

/// CSVヘッダーの書き込み
pub fn write_csv_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writeln!(writer, "t,y,y_h")
}

/// CSV行の作成
///
/// 列は時刻、sense 軸変位、調和成分による再構成値。
pub fn create_csv_row(sample: &Sample, fit: &HarmonicFit) -> String {
    format!("{},{},{}\n", sample.t, sample.state.y, fit.evaluate(sample.t))
}

/// `skip` サンプルごとに 1 行を書き込む
///
/// # 戻り値
/// - 書き込んだ行数（ヘッダーを除く）
pub fn write_csv_rows<W: Write>(
    writer: &mut W,
    series: &TimeSeries,
    fit: &HarmonicFit,
    skip: usize,
) -> Result<usize, SimulationError> {
    validate_skip(skip)?;

    let mut rows = 0;
    for sample in series.samples().iter().step_by(skip) {
        writer.write_all(create_csv_row(sample, fit).as_bytes())?;
        rows += 1;
    }
    Ok(rows)
}

/// ファイルへの書き出し一式
pub fn export_csv(
    path: &Path,
    series: &TimeSeries,
    fit: &HarmonicFit,
    skip: usize,
) -> Result<usize, SimulationError> {
    validate_skip(skip)?;
    let mut writer = setup_csv_output(path)?;
    let rows = write_csv_rows(&mut writer, series, fit, skip)?;
    writer.flush()?;
    info!(rows, path = %path.display(), "csv written");
    Ok(rows)
}
