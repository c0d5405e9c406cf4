// src/gui/capture.rs
//
// Chart snapshots for the visual report.
//
// Each chart reports the rect it painted this frame together with the
// visible part of the scroll area. Once every chart the current bundle draws
// has reported, the charts are captured one at a time: scroll the next slice
// of the chart into view, take a viewport screenshot, crop the slice out.
// Charts taller than the view are taken in several slices and stacked back
// together, so the result doesn't depend on where the page was scrolled.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use eframe::egui::{self, ColorImage, Pos2, Rect, UserData, Vec2, ViewportCommand};
use image::{imageops, RgbaImage};

use crate::{
    charts::ChartRegion,
    raster::png_data_url,
    session::VisualizationState,
};

// layout rounding slack, in points
const EPS: f32 = 0.5;
// frames to wait for a screenshot before asking again
const SHOT_PATIENCE: u32 = 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Waiting,
    Capturing,
    Done,
}

#[derive(Clone, Copy, Debug)]
struct Placed {
    rect: Rect,
    view: Rect,
}

struct Job {
    region: ChartRegion,
    height: f32,
    done: f32,
    slices: Vec<RgbaImage>,
}

struct Shot {
    seq: u64,
    slice: Rect,
    waited: u32,
}

#[derive(Default)]
pub struct CaptureTracker {
    rev: u64,
    phase: Phase,
    total: usize,
    finished: usize,
    // painted this frame
    frame: HashMap<ChartRegion, Placed>,
    queue: VecDeque<ChartRegion>,
    job: Option<Job>,
    in_flight: Option<Shot>,
    seq: u64,
    // scroll back here once the run is over
    rewind_to: Option<ChartRegion>,
}

impl CaptureTracker {
    /// Charts for the current bundle are still being captured.
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Capturing
    }

    /// A screenshot has been asked for and hasn't arrived yet.
    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// (captured, total) while a run is going.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.is_active().then_some((self.finished, self.total))
    }

    /// Called by the page after painting a chart. `view` is the visible part
    /// of the enclosing scroll area.
    pub fn record(&mut self, rev: u64, region: ChartRegion, rect: Rect, view: Rect) {
        if rev != self.rev {
            self.reset(rev);
        }
        self.frame.insert(region, Placed { rect, view });
    }

    /// Where the page should scroll (top-aligned) for `region`, if anywhere.
    pub fn scroll_target(&mut self, region: ChartRegion) -> Option<Rect> {
        let placed = *self.frame.get(&region)?;
        if self.phase == Phase::Done && self.rewind_to == Some(region) {
            self.rewind_to = None;
            return Some(placed.rect);
        }
        if self.in_flight.is_some() {
            return None;
        }
        let job = self.job.as_ref().filter(|j| j.region == region)?;
        Some(slice_of(&placed, job.done))
    }

    fn reset(&mut self, rev: u64) {
        logd!("Capture: armed for rev {}", rev);
        *self = Self { rev, seq: self.seq, ..Self::default() };
    }

    /// Render-complete check, run after all pages drew this frame.
    pub fn request_if_ready(&mut self, ctx: &egui::Context, vis: &VisualizationState) {
        if vis.bundle_platform.is_none() || vis.bundle_rev() != self.rev {
            return;
        }
        if let Some(seq) = self.next_shot(&vis.expected_regions()) {
            ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::new((self.rev, seq))));
        }
    }

    /// Move the run along. Returns the tag of a screenshot to take now.
    fn next_shot(&mut self, expected: &[ChartRegion]) -> Option<u64> {
        if self.phase == Phase::Waiting {
            if expected.is_empty() {
                self.phase = Phase::Done;
                return None;
            }
            if !expected.iter().all(|r| self.frame.contains_key(r)) {
                return None;
            }
            logf!("Capture: all {} chart(s) drawn for rev {}, capturing", expected.len(), self.rev);
            self.phase = Phase::Capturing;
            self.total = expected.len();
            self.queue = expected.iter().copied().collect();
            self.rewind_to = expected.first().copied();
            self.advance();
        }
        if self.phase != Phase::Capturing {
            return None;
        }
        if let Some(shot) = &self.in_flight {
            if shot.waited < SHOT_PATIENCE {
                return None;
            }
            logd!("Capture: screenshot {} never arrived, asking again", shot.seq);
            self.in_flight = None;
        }

        loop {
            let region = self.job.as_ref()?.region;
            // not on screen this frame (other page); pick up again later
            let placed = *self.frame.get(&region)?;
            if placed.rect.width() >= 1.0 && placed.rect.height() >= 1.0 {
                break;
            }
            logd!("Capture: {:?} has no area, skipped", region);
            self.finished += 1;
            self.advance();
            if self.phase != Phase::Capturing {
                return None;
            }
        }

        let job = self.job.as_mut()?;
        let placed = *self.frame.get(&job.region)?;
        if placed.view.height() < 1.0 {
            return None;
        }
        job.height = placed.rect.height();

        let slice = slice_of(&placed, job.done);
        let visible = slice.top() >= placed.view.top() - EPS && slice.bottom() <= placed.view.bottom() + EPS;
        if !visible {
            // the page scrolls it in during this frame
            return None;
        }

        self.seq += 1;
        logd!("Capture: {:?} slice at +{:.0} (seq {})", job.region, job.done, self.seq);
        self.in_flight = Some(Shot { seq: self.seq, slice: slice.intersect(placed.view), waited: 0 });
        Some(self.seq)
    }

    fn advance(&mut self) {
        self.job = self
            .queue
            .pop_front()
            .map(|region| Job { region, height: 0.0, done: 0.0, slices: Vec::new() });
        if self.job.is_none() {
            logf!("Capture: rev {} finished, {}/{} chart(s)", self.rev, self.finished, self.total);
            self.phase = Phase::Done;
        }
    }

    /// Pick up screenshot events and crop them. Also clears the per-frame
    /// rects, so call once at the top of each frame.
    pub fn collect(&mut self, ctx: &egui::Context, vis: &mut VisualizationState) {
        self.frame.clear();
        if let Some(shot) = &mut self.in_flight {
            shot.waited += 1;
        }

        let shots: Vec<(Arc<ColorImage>, Option<(u64, u64)>)> = ctx.input(|i| {
            i.raw
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Screenshot { image, user_data, .. } => {
                        let tag = user_data
                            .data
                            .as_ref()
                            .and_then(|d| d.downcast_ref::<(u64, u64)>())
                            .copied();
                        Some((image.clone(), tag))
                    }
                    _ => None,
                })
                .collect()
        });

        let ppp = ctx.pixels_per_point();
        for (image, tag) in shots {
            let Some((rev, seq)) = tag.filter(|(rev, _)| *rev == self.rev) else {
                logd!("Capture: ignoring screenshot {:?} (now rev {})", tag, self.rev);
                continue;
            };
            let Some((region, img)) = self.accept(seq, &image, ppp) else { continue };

            let (w, h) = img.dimensions();
            match png_data_url(w, h, img.into_raw()) {
                Ok(url) => {
                    if vis.set_snapshot(rev, region, url) {
                        logf!("Capture: {:?} stored ({}x{})", region, w, h);
                    }
                }
                Err(e) => loge!("Capture: {:?} encode failed: {}", region, e),
            }
        }
    }

    /// Crop the in-flight slice out of a screenshot. Returns the whole chart
    /// once its last slice is in.
    fn accept(&mut self, seq: u64, image: &ColorImage, ppp: f32) -> Option<(ChartRegion, RgbaImage)> {
        let shot = self.in_flight.take_if(|s| s.seq == seq)?;
        let job = self.job.as_mut()?;

        let bounds = Rect::from_min_size(
            Pos2::ZERO,
            Vec2::new(image.size[0] as f32 / ppp, image.size[1] as f32 / ppp),
        );
        let clipped = shot.slice.intersect(bounds);
        if clipped.is_positive() {
            let crop = image.region(&clipped, Some(ppp));
            if let Some(part) = to_rgba(&crop) {
                job.slices.push(part);
            }
        }
        job.done += shot.slice.height();
        if job.done + EPS < job.height {
            return None;
        }

        let job = self.job.take()?;
        self.finished += 1;
        self.advance();
        stitch(&job.slices).map(|img| (job.region, img))
    }
}

/// The next view-sized piece of a chart, starting `done` points in.
fn slice_of(p: &Placed, done: f32) -> Rect {
    let top = p.rect.top() + done;
    let bottom = p.rect.bottom().min(top + p.view.height());
    Rect::from_x_y_ranges(p.rect.x_range(), top..=bottom)
}

fn to_rgba(img: &ColorImage) -> Option<RgbaImage> {
    let rgba: Vec<u8> = img.pixels.iter().flat_map(|c| c.to_srgba_unmultiplied()).collect();
    RgbaImage::from_raw(img.size[0] as u32, img.size[1] as u32, rgba)
}

/// Stack slices top to bottom.
fn stitch(slices: &[RgbaImage]) -> Option<RgbaImage> {
    let width = slices.iter().map(RgbaImage::width).max()?;
    let height: u32 = slices.iter().map(RgbaImage::height).sum();
    if width == 0 || height == 0 {
        return None;
    }
    let mut out = RgbaImage::new(width, height);
    let mut y = 0i64;
    for s in slices {
        imageops::overlay(&mut out, s, 0, y);
        y += i64::from(s.height());
    }
    Some(out)
}
