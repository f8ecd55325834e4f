use bevy_ecs::prelude::*;

use crate::resources::fpscounter::FpsCounter;
use crate::resources::worldtime::WorldTime;

/// Count one frame of unscaled `WorldTime::real_delta`.
pub fn fps_system(time: Res<WorldTime>, mut fps: ResMut<FpsCounter>) {
    fps.draw_call(time.real_delta);
}
