mod closest;
mod plane;
mod ray;
