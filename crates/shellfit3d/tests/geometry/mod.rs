#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod capsule_mesh;
mod convex_hull;
mod fitting;
mod islands;
mod kdop;
mod miniball;
mod minimum_sphere;
mod oriented_box;
