//! Subcommand handlers.

use anyhow::{Context, Result};
use etrs_rs::{
    GeodeticFrame, Geographic, HelmertParameters, Position3D, StationState,
    TransformOptions, itrf2014_to_etrf2014_cartesian, itrf2014_to_etrf2014_geographic,
};
use log::debug;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct StateReport {
    epoch: f64,
    position_m: [f64; 3],
    velocity_m_per_yr: [f64; 3],
}

impl From<&StationState> for StateReport {
    fn from(s: &StationState) -> Self {
        Self {
            epoch: s.epoch.years(),
            position_m: s.position.to_array(),
            velocity_m_per_yr: s.velocity.to_array(),
        }
    }
}

#[derive(Debug, Serialize)]
struct GeographicReport {
    ellipsoid: String,
    datum: String,
    lon_deg: f64,
    lat_deg: f64,
    height_m: f64,
}

#[derive(Debug, Serialize)]
struct TransformReport {
    source_frame: &'static str,
    target_frame: &'static str,
    source_epoch: f64,
    etrf2014: StateReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    geographic: Option<GeographicReport>,
}

#[derive(Debug, Serialize)]
struct ParamsReport {
    translation_mm: [f64; 3],
    translation_rate_mm_per_yr: [f64; 3],
    rotation_mas: [f64; 3],
    rotation_rate_mas_per_yr: [f64; 3],
    scale_ppb: f64,
    reference_epoch: f64,
}

pub fn cartesian(position: Position3D, options: &TransformOptions, json: bool) -> Result<()> {
    debug!("ITRF2014 input: {position:?}, options: {options:?}");
    let state = itrf2014_to_etrf2014_cartesian(position, options)
        .context("ITRF2014 to ETRF2014 transform failed")?;
    debug!("ETRF2014 state: {state:?}");

    let report = TransformReport {
        source_frame: "ITRF2014",
        target_frame: "ETRF2014",
        source_epoch: options.source_epoch.years(),
        etrf2014: StateReport::from(&state),
        geographic: None,
    };
    emit(&report, json)
}

pub fn geographic(input: Geographic, options: &TransformOptions, json: bool) -> Result<()> {
    debug!(
        "WGS84 input: lon={} lat={} h={}, options: {options:?}",
        input.lon_deg, input.lat_deg, input.height_m
    );
    let out = itrf2014_to_etrf2014_geographic(input, options)
        .context("geographic ITRF2014 to ETRF2014 transform failed")?;
    debug!("ETRF2014 state: {:?}", out.state);

    let frame = GeodeticFrame::ETRF2014_GRS80;
    let report = TransformReport {
        source_frame: "ITRF2014",
        target_frame: "ETRF2014",
        source_epoch: options.source_epoch.years(),
        etrf2014: StateReport::from(&out.state),
        geographic: Some(GeographicReport {
            ellipsoid: frame.ellipsoid().to_string(),
            datum: frame.datum().to_string(),
            lon_deg: out.geographic.lon_deg,
            lat_deg: out.geographic.lat_deg,
            height_m: out.geographic.height_m,
        }),
    };
    emit(&report, json)
}

pub fn params(json: bool) -> Result<()> {
    let p = HelmertParameters::ITRF2014_TO_ETRF2014;
    if json {
        let report = ParamsReport {
            translation_mm: p.translation_mm,
            translation_rate_mm_per_yr: p.translation_rate_mm_per_yr,
            rotation_mas: p.rotation_mas,
            rotation_rate_mas_per_yr: p.rotation_rate_mas_per_yr,
            scale_ppb: p.scale_ppb,
            reference_epoch: p.reference_epoch.years(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("ITRF2014 -> ETRF2014 (reference epoch {:.1})", p.reference_epoch.years());
    print_triple("T  (mm)     ", p.translation_mm);
    print_triple("dT (mm/yr)  ", p.translation_rate_mm_per_yr);
    print_triple("R  (mas)    ", p.rotation_mas);
    print_triple("dR (mas/yr) ", p.rotation_rate_mas_per_yr);
    println!("D  (ppb)     {:>10.3}", p.scale_ppb);
    Ok(())
}

fn emit(report: &TransformReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }
    let s = &report.etrf2014;
    println!(
        "ETRF2014 @ {:.4} (from ITRF2014 @ {:.4})",
        s.epoch, report.source_epoch
    );
    println!(
        "Position (m):    {:.4} {:.4} {:.4}",
        s.position_m[0], s.position_m[1], s.position_m[2]
    );
    println!(
        "Velocity (m/yr): {:.6} {:.6} {:.6}",
        s.velocity_m_per_yr[0], s.velocity_m_per_yr[1], s.velocity_m_per_yr[2]
    );
    if let Some(g) = &report.geographic {
        println!(
            "Geographic ({}/{}): lon {:.9} lat {:.9} h {:.4}",
            g.ellipsoid, g.datum, g.lon_deg, g.lat_deg, g.height_m
        );
    }
    Ok(())
}

fn print_triple(label: &str, v: [f64; 3]) {
    println!("{label} {:>10.3} {:>10.3} {:>10.3}", v[0], v[1], v[2]);
}
