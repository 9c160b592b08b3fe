//! Crossterm terminal renderer for pathgrid.
//!
//! Provides a [`Renderer`] that draws [`Step`] events as a colour-coded
//! grid with a legend and statistics. It is an observer: the search never
//! waits on it, and all pacing happens in [`Renderer::animate`].

use std::collections::HashSet;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{self, ClearType},
};

use pathgrid_core::{GridGraph, Point};
use pathgrid_search::Step;

/// How the renderer draws and paces frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Draw frames at all. When `false`, [`Renderer::animate`] only drains
    /// the steps.
    pub animate: bool,
    /// Pause after each frame.
    pub delay: Duration,
    /// Clear the screen before each frame.
    pub clear: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            animate: true,
            delay: Duration::from_millis(100),
            clear: true,
        }
    }
}

/// How a single cell is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Wall,
    Current,
    Open,
    Closed,
    Path,
    Unvisited,
}

impl Mark {
    /// Three-column glyph drawn for the cell.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Wall => " ■ ",
            Self::Current => " C ",
            Self::Open => " O ",
            Self::Closed => " X ",
            Self::Path => " P ",
            Self::Unvisited => " · ",
        }
    }

    /// Background colour, or `None` to keep the terminal default.
    fn background(self) -> Option<CtColor> {
        match self {
            Self::Wall => Some(CtColor::Black),
            Self::Current => Some(CtColor::Magenta),
            Self::Open => Some(CtColor::DarkYellow),
            Self::Closed => Some(CtColor::DarkBlue),
            Self::Path => Some(CtColor::DarkGreen),
            Self::Unvisited => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Wall => "Wall",
            Self::Current => "Current Node",
            Self::Open => "Open Set",
            Self::Closed => "Closed Set",
            Self::Path => "Path",
            Self::Unvisited => "Unvisited",
        }
    }

    const LEGEND: [Mark; 6] = [
        Self::Wall,
        Self::Current,
        Self::Open,
        Self::Closed,
        Self::Path,
        Self::Unvisited,
    ];
}

/// Draws search steps for one grid.
pub struct Renderer<'g> {
    graph: &'g GridGraph,
    config: RenderConfig,
    frames: usize,
}

impl<'g> Renderer<'g> {
    pub fn new(graph: &'g GridGraph, config: RenderConfig) -> Self {
        Self {
            graph,
            config,
            frames: 0,
        }
    }

    pub fn config(&self) -> RenderConfig {
        self.config
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Consume `steps`, drawing each one and sleeping for the configured
    /// delay. Returns the number of steps consumed.
    pub fn animate<W, I>(&mut self, out: &mut W, steps: I) -> io::Result<usize>
    where
        W: Write,
        I: IntoIterator<Item = Step>,
    {
        let mut count = 0;
        for step in steps {
            count += 1;
            if !self.config.animate {
                continue;
            }
            self.draw(out, &step)?;
            if !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
        }
        Ok(count)
    }

    /// Draw one frame for `step`.
    pub fn draw<W: Write>(&mut self, out: &mut W, step: &Step) -> io::Result<()> {
        let view = StepView::new(step);
        let width = self.graph.width();

        if self.config.clear {
            queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }
        queue!(
            out,
            SetAttribute(Attribute::Bold),
            Print("\n=== Pathfinding Visualization ===\n"),
            SetAttribute(Attribute::Reset),
            Print(format!("Grid Size: {}x{}\n", width, self.graph.height())),
        )?;

        // Column numbers and top border.
        write!(out, "    ")?;
        for x in 0..width {
            write!(out, "{x:2} ")?;
        }
        writeln!(out)?;
        writeln!(out, "   ╔{}╗", "═".repeat(width as usize * 3))?;

        for y in 0..self.graph.height() {
            write!(out, "{y:2} ║")?;
            for x in 0..width {
                let mark = self.classify(Point::new(x, y), &view);
                draw_mark(out, mark)?;
            }
            writeln!(out, "║")?;
        }
        writeln!(out, "   ╚{}╝", "═".repeat(width as usize * 3))?;

        writeln!(out, "\nLegend:")?;
        for mark in Mark::LEGEND {
            draw_mark(out, mark)?;
            writeln!(out, " {}", mark.label())?;
        }

        writeln!(out, "\nCurrent Node: {}", step.current)?;
        writeln!(out, "Open Set Size: {}", step.open.len())?;
        writeln!(out, "Closed Set Size: {}", step.closed.len())?;
        if let Some(path) = &step.path {
            writeln!(out, "Path Length: {} steps", path.steps())?;
        }
        out.flush()?;

        self.frames += 1;
        log::trace!("drew frame {} at {}", self.frames, step.current);
        Ok(())
    }

    /// How `p` is shown for the step. Path beats current, which beats open,
    /// which beats closed.
    fn classify(&self, p: Point, view: &StepView<'_>) -> Mark {
        if !self.graph.at(p).is_some_and(|c| c.is_free()) {
            Mark::Wall
        } else if view.step.path.as_ref().is_some_and(|path| path.contains(p)) {
            Mark::Path
        } else if p == view.step.current {
            Mark::Current
        } else if view.open.contains(&p) {
            Mark::Open
        } else if view.closed.contains(&p) {
            Mark::Closed
        } else {
            Mark::Unvisited
        }
    }
}

/// A step with its snapshots indexed for lookup.
struct StepView<'s> {
    step: &'s Step,
    open: HashSet<Point>,
    closed: HashSet<Point>,
}

impl<'s> StepView<'s> {
    fn new(step: &'s Step) -> Self {
        Self {
            step,
            open: step.open.iter().copied().collect(),
            closed: step.closed.iter().copied().collect(),
        }
    }
}

fn draw_mark<W: Write>(out: &mut W, mark: Mark) -> io::Result<()> {
    match mark.background() {
        Some(bg) => queue!(
            out,
            SetBackgroundColor(bg),
            SetForegroundColor(CtColor::White),
            Print(mark.glyph()),
            ResetColor
        ),
        None => queue!(out, Print(mark.glyph())),
    }
}
