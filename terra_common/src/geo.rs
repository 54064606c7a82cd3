/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “TERRA” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! geometry support for areas of interest that are specified as GeoJSON.
//! Following our design principles we use existing crates, which in this domain are
//! [geo](https://docs.rs/geo/latest/geo/index.html) and [geojson](https://docs.rs/geojson/latest/geojson/index.html).
//! The newtypes here mostly fix the semantics we need on top of them, e.g. which geometry of a GeoJSON envelope
//! is used and whether boundaries count as inside

use std::fmt;
use geo::{BoundingRect, Intersects, MultiPolygon, Point, Polygon, Rect};
use geojson::{GeoJson, Geometry, Value};

use crate::errors::{Result, unsupported_geometry};

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees stored as f64.
/// Note that we do not normalize since callers rely on exact coordinate values (e.g. for grouping)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64) -> Self {
        GeoPoint( Point::new( lon, lat))
    }

    #[inline] pub fn longitude_degrees(&self) -> f64 { self.0.x() }
    #[inline] pub fn latitude_degrees(&self) -> f64 { self.0.y() }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0.x(),self.0.y())
    }
}

/* #endregion GeoPoint */

/* #region AreaOfInterest *****************************************************************************************/

/// a (multi) polygon that is used to filter points.
/// 
/// AreaOfInterests are created from GeoJSON envelopes: a bare geometry, a Feature (its geometry is used) or a
/// FeatureCollection (the geometry of the first feature is used, all others are ignored). Only Polygon and
/// MultiPolygon geometries are supported.
/// 
/// Containment is boundary-inclusive: points on the exterior ring or on the ring of a hole are inside, points that are
/// strictly within a hole are outside.
#[derive(Debug,Clone)]
pub struct AreaOfInterest {
    area: MultiPolygon,
    bounds: Option<Rect>
}

impl AreaOfInterest {
    pub fn from_multi_polygon (area: MultiPolygon)->Self {
        let bounds = area.bounding_rect();
        AreaOfInterest { area, bounds }
    }

    pub fn from_polygon (polygon: Polygon)->Self {
        Self::from_multi_polygon( MultiPolygon::new( vec![polygon]))
    }

    /// normalize the GeoJSON envelope and convert the resulting geometry
    pub fn from_geojson (geojson: GeoJson)->Result<Self> {
        let geometry = match geojson {
            GeoJson::FeatureCollection(fc) => {
                let feature = fc.features.into_iter().next().ok_or_else(|| unsupported_geometry("empty FeatureCollection"))?;
                feature.geometry.ok_or_else(|| unsupported_geometry("first feature has no geometry"))?
            }
            GeoJson::Feature(feature) => {
                feature.geometry.ok_or_else(|| unsupported_geometry("feature has no geometry"))?
            }
            GeoJson::Geometry(geometry) => geometry
        };
        Self::from_geometry( geometry)
    }

    pub fn from_geometry (geometry: Geometry)->Result<Self> {
        match geometry.value {
            v @ Value::Polygon(_) => Ok( Self::from_polygon( Polygon::<f64>::try_from(v)?)),
            v @ Value::MultiPolygon(_) => Ok( Self::from_multi_polygon( MultiPolygon::<f64>::try_from(v)?)),
            other => Err( unsupported_geometry( geometry_type_name(&other)))
        }
    }

    pub fn from_json_value (value: serde_json::Value)->Result<Self> {
        Self::from_geojson( GeoJson::from_json_value(value)?)
    }

    pub fn from_json_str (s: &str)->Result<Self> {
        Self::from_geojson( s.parse::<GeoJson>()?)
    }

    pub fn contains_lon_lat (&self, lon: f64, lat: f64)->bool {
        let p = Point::new(lon,lat);
        if let Some(bounds) = &self.bounds {
            if !bounds.intersects(&p) { return false }
        }
        self.area.intersects(&p)
    }

    #[inline]
    pub fn contains (&self, p: &GeoPoint)->bool {
        self.contains_lon_lat( p.longitude_degrees(), p.latitude_degrees())
    }

    pub fn multi_polygon (&self)->&MultiPolygon { &self.area }

    pub fn bounds (&self)->Option<&Rect> { self.bounds.as_ref() }
}

fn geometry_type_name (value: &Value)->&'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/* #endregion AreaOfInterest */
