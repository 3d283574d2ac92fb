mod easing;
mod entrance;

pub(crate) use easing::ease_out_cubic;
pub(crate) use entrance::Entrance;
