mod annotated;
mod end_to_end;
mod lines;
