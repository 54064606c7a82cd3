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

use std::collections::BTreeMap;
use serde::Serialize;
use tracing::{info,error};

use terra_common::MinMaxAvg;
use crate::{IndicatorType, Sample, validate::RowRejection, reduce::ResolvedPoint};

pub const MAX_SAMPLE_DATES: usize = 10;

/// diagnostics of one resolution request
#[derive(Debug,Clone,Default,Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ResolutionStats {
    pub rows_read: usize,
    pub rows_accepted: usize, // valid and inside polygon
    pub rejections: BTreeMap<RowRejection,usize>,
    pub distinct_coordinates: usize,
    pub resolved_points: usize,

    pub sample_dates: Vec<String>, // the first MAX_SAMPLE_DATES unique raw dates of accepted rows

    //--- over resolved points
    pub value_range: Option<MinMaxAvg>,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub zero_values: usize,
}

impl ResolutionStats {
    pub fn new()->Self { Self::default() }

    pub fn reject (&mut self, reason: RowRejection) {
        *self.rejections.entry(reason).or_insert(0) += 1;
    }

    pub fn accept (&mut self, sample: &Sample) {
        self.rows_accepted += 1;
        if self.sample_dates.len() < MAX_SAMPLE_DATES && !self.sample_dates.contains( &sample.raw_date) {
            self.sample_dates.push( sample.raw_date.clone());
        }
    }

    pub fn rejected (&self, reason: RowRejection)->usize {
        self.rejections.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_rejected (&self)->usize {
        self.rejections.values().sum()
    }

    /// record what we resolved. Points have to be sorted chronologically
    pub fn set_resolved (&mut self, distinct_coordinates: usize, points: &[ResolvedPoint]) {
        self.distinct_coordinates = distinct_coordinates;
        self.resolved_points = points.len();

        let mut range = MinMaxAvg::new();
        for p in points {
            if let Some(v) = p.sample.value.as_f64() { range.add(v) }
            if p.sample.value.is_zero() { self.zero_values += 1 }
        }
        self.value_range = if range.is_empty() { None } else { Some(range) };

        self.first_date = points.first().map( |p| p.sample.raw_date.clone());
        self.last_date = points.last().map( |p| p.sample.raw_date.clone());
    }

    pub fn log_summary (&self, indicator: IndicatorType) {
        if self.resolved_points == 0 {
            info!("{indicator}: no points found inside polygon ({} rows read, {} rejected)", self.rows_read, self.total_rejected());
            return
        }

        info!("{indicator}: {} points found inside polygon ({} rows read, {} accepted, {} outside)",
              self.resolved_points, self.rows_read, self.rows_accepted, self.rejected( RowRejection::OutsidePolygon));
        info!("{indicator}: sample dates {:?}", self.sample_dates);

        if let (Some(first),Some(last)) = (&self.first_date, &self.last_date) {
            info!("{indicator}: date range {first} - {last}");
        }
        if let Some(range) = &self.value_range {
            info!("{indicator}: value range {} - {} (avg {:.3})", range.min, range.max, range.avg);
        }

        if self.zero_values > 0 {
            if indicator.rejects_zero() {
                error!("{indicator}: {} zero values in result", self.zero_values);
            } else {
                info!("{indicator}: {} zero values in result", self.zero_values);
            }
        }
    }
}
