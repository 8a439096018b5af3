//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::center::center;
pub use self::cleanup::remove_unused_points;
pub use self::cov::{center_cov, cov};
pub use self::point_cloud_aabb::point_cloud_aabb;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::sorted_pair::SortedPair;

mod ccw_face_normal;
mod center;
mod cleanup;
mod cov;
pub mod hashmap;
mod point_cloud_aabb;
mod point_cloud_support_point;
mod sorted_pair;
