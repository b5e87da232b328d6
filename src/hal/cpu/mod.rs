mod add;
mod copy;
mod matmul;
mod slice;
mod transpose;
