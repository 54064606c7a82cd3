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

//! grouping of samples by exact coordinate and selection of the sample nearest to a target date.
//!
//! Coordinates are compared exactly. Values that only differ by floating point noise (e.g. `29.91670000001` and
//! `29.9167`) end up in different groups, we do not snap.

use chrono::{DateTime,Utc};
use indexmap::{IndexMap, map::Entry};

use terra_common::{datetime::abs_millis_between, geo::GeoPoint};
use crate::Sample;

/// exact (lon,lat) identity of a sample position. -0.0 and 0.0 are the same key
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub struct CoordKey(u64,u64);

impl CoordKey {
    pub fn new (lon: f64, lat: f64)->Self {
        CoordKey( key_bits(lon), key_bits(lat))
    }

    pub fn of (p: &GeoPoint)->Self {
        Self::new( p.longitude_degrees(), p.latitude_degrees())
    }
}

#[inline]
fn key_bits (x: f64)->u64 {
    if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() }
}

/// partition samples by coordinate. Groups are kept in order of first appearance, and so are group members
pub fn group_by_coordinate (samples: impl IntoIterator<Item=Sample>)->IndexMap<CoordKey,Vec<Sample>> {
    let mut groups: IndexMap<CoordKey,Vec<Sample>> = IndexMap::new();
    for sample in samples {
        groups.entry( CoordKey::of(&sample.position)).or_default().push(sample);
    }
    groups
}

/// the group member that is closest in time to `target`. On equal distance the first one wins
pub fn nearest_to<'a> (group: &'a [Sample], target: &DateTime<Utc>)->Option<&'a Sample> {
    let mut it = group.iter();
    let mut best = it.next()?;
    let mut best_diff = abs_millis_between( target, &best.date);

    for sample in it {
        let diff = abs_millis_between( target, &sample.date);
        if diff < best_diff {
            best = sample;
            best_diff = diff;
        }
    }
    Some(best)
}

/// the winning sample of a coordinate group
#[derive(Debug,Clone,PartialEq)]
pub struct ResolvedPoint {
    pub sample: Sample,
    pub time_diff_ms: i64, // |target - sample.date|
}

/// incremental version of [`group_by_coordinate`] + [`nearest_to`] that only keeps the current winner per
/// coordinate, i.e. memory is bounded by the number of distinct coordinates, not the number of samples.
/// The result is the same as grouping first and then reducing each group
#[derive(Debug)]
pub struct NearestDateReducer {
    target: DateTime<Utc>,
    winners: IndexMap<CoordKey,ResolvedPoint>,
    n_samples: usize,
}

impl NearestDateReducer {
    pub fn new (target: DateTime<Utc>)->Self {
        NearestDateReducer { target, winners: IndexMap::new(), n_samples: 0 }
    }

    /// returns true if the sample is the new winner for its coordinate
    pub fn add (&mut self, sample: Sample)->bool {
        self.n_samples += 1;
        let time_diff_ms = abs_millis_between( &self.target, &sample.date);

        match self.winners.entry( CoordKey::of(&sample.position)) {
            Entry::Occupied(mut e) => {
                if time_diff_ms < e.get().time_diff_ms {
                    e.insert( ResolvedPoint { sample, time_diff_ms });
                    true
                } else {
                    false
                }
            }
            Entry::Vacant(e) => {
                e.insert( ResolvedPoint { sample, time_diff_ms });
                true
            }
        }
    }

    pub fn target (&self)->&DateTime<Utc> { &self.target }

    /// number of distinct coordinates seen so far
    pub fn len (&self)->usize { self.winners.len() }

    pub fn is_empty (&self)->bool { self.winners.is_empty() }

    /// number of samples added so far
    pub fn n_samples (&self)->usize { self.n_samples }

    /// the winners in order of first appearance of their coordinate
    pub fn into_resolved (self)->Vec<ResolvedPoint> {
        self.winners.into_values().collect()
    }
}

/// reduce already grouped samples
pub fn reduce_groups (groups: &IndexMap<CoordKey,Vec<Sample>>, target: &DateTime<Utc>)->Vec<ResolvedPoint> {
    groups.values()
        .filter_map( |group| nearest_to( group, target))
        .map( |sample| ResolvedPoint { sample: sample.clone(), time_diff_ms: abs_millis_between( target, &sample.date) })
        .collect()
}
