pub mod circsim_vis2d;
