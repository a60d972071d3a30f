// chat-jumper — Floor navigation for virtualized chat transcripts
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

mod actions;
mod anchor;
mod controller;
mod favorites;
mod jump;
mod pick;
mod range;
mod session;

pub use actions::NavAction;
pub use anchor::{anchor_element, resolve_anchor};
pub use controller::Navigator;
pub use favorites::FavoriteSet;
pub use jump::{JumpConfig, Jumper, last_position};
pub use pick::{PickMode, PointerSample};
pub use range::{ActiveRange, parse_range};
pub use session::{ChangeReason, SessionWatcher};
