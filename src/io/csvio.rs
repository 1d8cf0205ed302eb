//! csv io.
//!
//! Input : each record is a comma separated list of integers giving the coordinates of one point.
//! There is no header, all records must have the same number of fields.

use anyhow::anyhow;
use num_traits::float::Float;

use std::fmt::Debug;
use std::fs::OpenOptions;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::kmeans::lloyd::Clustering;
use crate::kmeans::point::Point;

/// reads points from a reader. Point ids are record ranks (blank lines are skipped and not counted)
pub fn load_points_from_reader<T, R>(reader: R) -> anyhow::Result<Vec<Point<T>>>
where
    T: Float + Debug,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    //
    let mut points = Vec::<Point<T>>::new();
    for (num_record, result) in rdr.deserialize::<Vec<i64>>().enumerate() {
        // The iterator yields Result<Vec<i64>, Error>, a non integer field or a record
        // of bad length is reported here.
        let record = result.map_err(|e| {
            log::error!("error decoding record {} : {}", num_record, e);
            anyhow!("error decoding record {} : {}", num_record, e)
        })?;
        let mut position = Vec::<T>::with_capacity(record.len());
        for field in record {
            let x = T::from(field)
                .ok_or_else(|| anyhow!("record {} : cannot convert {} to float", num_record, field))?;
            position.push(x);
        }
        points.push(Point::new(num_record, position));
    }
    log::info!("number of records loaded : {}", points.len());
    //
    Ok(points)
} // end of load_points_from_reader

/// reads points from a csv file. The file is closed at return.
pub fn load_csv_points<T, P>(path: P) -> anyhow::Result<Vec<Point<T>>>
where
    T: Float + Debug,
    P: AsRef<Path>,
{
    let filepath = path.as_ref();
    let file = OpenOptions::new().read(true).open(filepath).map_err(|e| {
        log::error!("load_csv_points could not open {:?}", filepath.as_os_str());
        anyhow!("load_csv_points could not open file {} : {}", filepath.display(), e)
    })?;
    load_points_from_reader(BufReader::new(file))
} // end of load_csv_points

/// dumps a clustering, one record by point : label, point id, coordinates.
/// Clusters are dumped in label order of first appearance.
pub fn dump_clustering_csv<T, P>(clustering: &Clustering<T>, path: P) -> anyhow::Result<()>
where
    T: Float + Debug,
    P: AsRef<Path>,
{
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for (label, group) in clustering.get_groups() {
        for p in group {
            let mut record = Vec::<String>::with_capacity(2 + p.get_dimension());
            record.push(label.to_string());
            record.push(p.get_id().to_string());
            record.extend(p.get_position().iter().map(|x| format!("{:?}", x)));
            wtr.write_record(&record)?;
        }
    }
    wtr.flush()?;
    log::info!("clustering dumped in {}", path.as_ref().display());
    Ok(())
} // end of dump_clustering_csv

//========================================================

// end of mod tests
