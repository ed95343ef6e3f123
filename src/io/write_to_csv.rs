use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::disc::{mesh::mesh1d::Mesh1d, swe1d::ShallowWaterState};
use crate::error::Result;

#[derive(Serialize)]
struct PointData {
    elem: usize,
    x: f64,
    h: f64,
    u: f64,
}

/// Writes one row per node: element index, coordinate, height and velocity.
pub fn write_to_csv(
    state: &ShallowWaterState,
    mesh: &Mesh1d,
    filename: impl AsRef<Path>,
) -> Result<()> {
    let mut writer = Writer::from_path(filename)?;
    for (ielem, elem) in mesh.elements.iter().enumerate() {
        for (inode, &x) in elem.nodes.iter().enumerate() {
            let data = PointData {
                elem: ielem,
                x,
                h: state.h[(ielem, inode)],
                u: state.u[(ielem, inode)],
            };
            writer.serialize(data)?;
        }
    }
    writer.flush()?;
    Ok(())
}
