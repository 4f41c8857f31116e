mod plane;
mod sphere;
