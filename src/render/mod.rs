mod chart_renderer;
mod figure;
mod memory_surface;
mod surface;

pub use chart_renderer::{RenderOutcome, render_figure};
pub use figure::{
    AxisLayout, AxisValues, Figure, FontLayout, Layout, LineStyle, Margin, Marker, PlotConfig,
    Trace, TraceMode, TraceType,
};
pub use memory_surface::MemorySurface;
pub use surface::{ChartSurface, SharedSurface, SurfaceTarget};
